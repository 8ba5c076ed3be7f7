//! The provider interface the resolver consumes

use crate::{Bundle, Result};

/// A source of named profiles.
///
/// `load` fails with [`Error::ProfileNotFound`](crate::Error::ProfileNotFound)
/// when the profile is absent; any other error is a provider failure.
pub trait ConfigStore {
    /// Load the key-value table stored under `profile`.
    fn load(&self, profile: &str) -> Result<Bundle>;

    /// Check whether `profile` exists.
    ///
    /// The default implementation loads the profile and folds
    /// `ProfileNotFound` into `false`. Backends that can answer more cheaply
    /// should override it.
    fn exists(&self, profile: &str) -> Result<bool> {
        match self.load(profile) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn load(&self, profile: &str) -> Result<Bundle> {
        (**self).load(profile)
    }

    fn exists(&self, profile: &str) -> Result<bool> {
        (**self).exists(profile)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn load(&self, profile: &str) -> Result<Bundle> {
        (**self).load(profile)
    }

    fn exists(&self, profile: &str) -> Result<bool> {
        (**self).exists(profile)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for std::sync::Arc<S> {
    fn load(&self, profile: &str) -> Result<Bundle> {
        (**self).load(profile)
    }

    fn exists(&self, profile: &str) -> Result<bool> {
        (**self).exists(profile)
    }
}
