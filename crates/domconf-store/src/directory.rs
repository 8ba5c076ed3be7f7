//! Directory-backed profile store
//!
//! Each profile is one file in a flat directory, named after the profile:
//!
//! ```text
//! conf/
//!   env.properties
//!   default.properties
//!   acme_sales.properties
//!   foo_ops.toml
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::path::validate_profile_name;
use crate::{Bundle, ConfigStore, Error, NormalizedPath, Result, io, properties};

/// File formats a profile may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFormat {
    Properties,
    Toml,
    Json,
    Yaml,
}

impl ProfileFormat {
    /// Default lookup order when several files share a profile name.
    pub const DEFAULT_ORDER: [ProfileFormat; 4] = [
        ProfileFormat::Properties,
        ProfileFormat::Toml,
        ProfileFormat::Json,
        ProfileFormat::Yaml,
    ];

    /// File extensions recognised for this format, in lookup order.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ProfileFormat::Properties => &["properties"],
            ProfileFormat::Toml => &["toml"],
            ProfileFormat::Json => &["json"],
            ProfileFormat::Yaml => &["yaml", "yml"],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProfileFormat::Properties => "properties",
            ProfileFormat::Toml => "TOML",
            ProfileFormat::Json => "JSON",
            ProfileFormat::Yaml => "YAML",
        }
    }

    /// Decode file content into a flat string table.
    pub fn parse(&self, path: &NormalizedPath, content: &str) -> Result<BTreeMap<String, String>> {
        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: self.label().into(),
            message,
        };
        match self {
            ProfileFormat::Properties => {
                properties::parse(content).map_err(|e| parse_error(e.to_string()))
            }
            ProfileFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            ProfileFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ProfileFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

impl FromStr for ProfileFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "properties" => Ok(ProfileFormat::Properties),
            "toml" => Ok(ProfileFormat::Toml),
            "json" => Ok(ProfileFormat::Json),
            "yaml" | "yml" => Ok(ProfileFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProfileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extensions()[0])
    }
}

/// A [`ConfigStore`] reading `<profile>.<ext>` files from one directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: NormalizedPath,
    formats: Vec<ProfileFormat>,
}

impl DirectoryStore {
    /// Create a store over `root` using the default format order.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            formats: ProfileFormat::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Restrict and reorder the formats the store looks for.
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ProfileFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn formats(&self) -> &[ProfileFormat] {
        &self.formats
    }

    /// Find the file backing `profile`, if any.
    ///
    /// The first existing file in format order wins.
    pub fn locate(&self, profile: &str) -> Result<Option<(NormalizedPath, ProfileFormat)>> {
        if !validate_profile_name(profile) {
            return Err(Error::InvalidProfileName {
                profile: profile.to_string(),
            });
        }

        for format in &self.formats {
            for ext in format.extensions() {
                let candidate = self.root.join(&format!("{profile}.{ext}"));
                if io::file_exists(&candidate)? {
                    return Ok(Some((candidate, *format)));
                }
            }
        }
        Ok(None)
    }
}

impl ConfigStore for DirectoryStore {
    fn load(&self, profile: &str) -> Result<Bundle> {
        let Some((path, format)) = self.locate(profile)? else {
            return Err(Error::not_found(profile));
        };

        let content = match format {
            ProfileFormat::Properties => properties::decode(io::read_bytes(&path)?),
            _ => io::read_text(&path)?,
        };
        let entries = format.parse(&path, &content)?;
        tracing::debug!(profile, path = %path, entries = entries.len(), "Loaded profile");
        Ok(Bundle::new(profile, entries))
    }

    /// A name that cannot be a file stem has no file, so it is reported
    /// absent rather than as an error; `load` still rejects it.
    fn exists(&self, profile: &str) -> Result<bool> {
        if !validate_profile_name(profile) {
            tracing::debug!(profile, "Profile name is not a valid file stem");
            return Ok(false);
        }
        Ok(self.locate(profile)?.is_some())
    }
}
