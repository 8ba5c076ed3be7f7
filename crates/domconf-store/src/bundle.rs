//! Loaded profile contents

use std::collections::BTreeMap;

/// A loaded profile: an ordered table of string keys to string values.
///
/// Resolution code treats a bundle as opaque and only hands it back to
/// callers; the accessors here exist for those callers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bundle {
    profile: String,
    entries: BTreeMap<String, String>,
}

impl Bundle {
    /// Create a bundle for `profile` from its key-value entries.
    pub fn new(profile: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
        Self {
            profile: profile.into(),
            entries,
        }
    }

    /// Name of the profile this bundle was loaded from.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> BTreeMap<String, String> {
        self.entries
    }
}
