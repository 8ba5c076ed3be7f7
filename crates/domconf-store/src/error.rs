//! Error types for domconf-store

use std::path::PathBuf;

/// Result type for domconf-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or loading profiles
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Profile not found: {profile}")]
    ProfileNotFound { profile: String },

    #[error("Invalid profile name: {profile:?}")]
    InvalidProfileName { profile: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} profile at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported profile format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(profile: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            profile: profile.into(),
        }
    }

    /// Whether this error only says that the profile is absent.
    ///
    /// Existence checks fold this case into `false`; every other variant is a
    /// real provider failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound { .. })
    }
}
