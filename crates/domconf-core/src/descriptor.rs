//! The root environment descriptor

use domconf_store::{Bundle, ConfigStore};

use crate::{Error, Result};

/// Key of the domain table inside the descriptor.
pub const DOMAIN_KEY: &str = "domain";

/// Read-only view of the root descriptor profile.
#[derive(Debug, Clone)]
pub struct EnvironmentDescriptor {
    bundle: Bundle,
}

impl EnvironmentDescriptor {
    /// Load the descriptor stored under `profile`.
    pub fn load(store: &impl ConfigStore, profile: &str) -> Result<Self> {
        let bundle = store.load(profile)?;
        tracing::info!(profile, keys = bundle.len(), "Loaded environment descriptor");
        Ok(Self { bundle })
    }

    pub fn from_bundle(bundle: Bundle) -> Self {
        Self { bundle }
    }

    /// Value of `key`, or [`Error::MissingKey`].
    pub fn get(&self, key: &str) -> Result<&str> {
        self.bundle.get(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    pub fn has(&self, key: &str) -> bool {
        self.bundle.contains_key(key)
    }

    /// The underlying key-value table.
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }
}
