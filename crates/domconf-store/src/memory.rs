//! In-memory profile store

use std::collections::{BTreeMap, HashMap};

use crate::{Bundle, ConfigStore, Error, Result};

/// A [`ConfigStore`] holding profiles in memory.
///
/// # Example
///
/// ```
/// use domconf_store::{ConfigStore, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_profile("env", [("domain", "acme:acme.example.com")])
///     .with_profile("default", [("smtp.host", "localhost")]);
/// assert!(store.exists("env").unwrap());
/// assert!(!store.exists("acme_sales").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile.
    pub fn insert<K, V>(&mut self, profile: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.profiles.insert(profile.into(), table);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_profile<K, V>(
        mut self,
        profile: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(profile, entries);
        self
    }

    /// Names of all stored profiles, sorted.
    pub fn profiles(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, profile: &str) -> Result<Bundle> {
        self.profiles
            .get(profile)
            .map(|entries| Bundle::new(profile, entries.clone()))
            .ok_or_else(|| Error::not_found(profile))
    }

    fn exists(&self, profile: &str) -> Result<bool> {
        Ok(self.profiles.contains_key(profile))
    }
}
