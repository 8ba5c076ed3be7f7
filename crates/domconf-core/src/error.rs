//! Error types for domconf-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Profile store error: {0}")]
    ConfigStore(#[from] domconf_store::Error),

    #[error("Malformed domain entry {entry:?}: expected alias:host")]
    MalformedDomainEntry { entry: String },

    #[error("Missing key in environment descriptor: {key}")]
    MissingKey { key: String },

    #[error("Malformed recipient {recipient:?}: expected exactly one '@'")]
    MalformedRecipient { recipient: String },

    #[error("Bundle cache has not been initialized")]
    NotInitialized,

    #[error("Invalid resolver configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}
