//! Resolver configuration
//!
//! Names the two reserved profiles the resolver reads. Typically left at the
//! defaults, or loaded from a small TOML file:
//!
//! ```toml
//! descriptor_profile = "env"
//! default_profile = "default"
//! ```

use std::path::PathBuf;

use domconf_store::{NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Reserved profile names used by [`DomainResolver`](crate::DomainResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Profile holding the root environment descriptor.
    pub descriptor_profile: String,
    /// Profile loaded into the reserved default cache slot, and the profile
    /// name reported for unqualified host suffixes.
    pub default_profile: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            descriptor_profile: "env".to_string(),
            default_profile: "default".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            path: path.to_native(),
            message: e.to_string(),
        })
    }
}
