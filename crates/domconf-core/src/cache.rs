//! Cache of loaded profile bundles

use std::collections::HashMap;
use std::fmt;

use domconf_store::{Bundle, ConfigStore};

use crate::Result;
use crate::descriptor::EnvironmentDescriptor;
use crate::domain::alias_groups;

/// Key of a [`BundleCache`] entry.
///
/// The default bundle lives under its own variant, so no recipient domain can
/// collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// `<personal id>.<host>`
    Domain(String),
    /// The reserved default slot.
    Default,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Domain(domain) => f.write_str(domain),
            CacheKey::Default => f.write_str("default"),
        }
    }
}

/// Loaded bundles keyed by qualified domain, plus the default bundle.
#[derive(Debug, Clone)]
pub struct BundleCache {
    domains: HashMap<String, Bundle>,
    default: Bundle,
}

impl BundleCache {
    /// Check for and load every personal profile the descriptor declares, then
    /// load the default profile.
    ///
    /// Personal profiles the store does not have are skipped. Any other store
    /// failure, or a missing default profile, aborts the build.
    pub fn build(
        store: &impl ConfigStore,
        descriptor: &EnvironmentDescriptor,
        default_profile: &str,
    ) -> Result<Self> {
        let mut domains = HashMap::new();

        for group in alias_groups(descriptor)? {
            for id in &group.personal_ids {
                let profile = group.personal_profile(id);
                if !store.exists(&profile)? {
                    tracing::debug!(profile = %profile, "Skipping personal profile: not in store");
                    continue;
                }

                let key = group.personal_domain(id);
                let bundle = store.load(&profile)?;
                tracing::debug!(profile = %profile, key = %key, "Cached personal profile");
                if let Some(previous) = domains.insert(key.clone(), bundle) {
                    tracing::warn!(
                        key = %key,
                        replaced = previous.profile(),
                        by = %profile,
                        "Duplicate cache key; later declaration wins"
                    );
                }
            }
        }

        let default = store.load(default_profile)?;
        tracing::info!(
            personal = domains.len(),
            default = default_profile,
            "Built bundle cache"
        );
        Ok(Self { domains, default })
    }

    /// Bundle for a qualified recipient domain. Exact, case-sensitive match.
    pub fn get_domain(&self, domain: &str) -> Option<&Bundle> {
        self.domains.get(domain)
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Bundle> {
        match key {
            CacheKey::Domain(domain) => self.get_domain(domain),
            CacheKey::Default => Some(&self.default),
        }
    }

    pub fn default_bundle(&self) -> &Bundle {
        &self.default
    }

    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.get(key).is_some()
    }

    /// All keys, personal domains sorted, followed by the default key.
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut domains: Vec<&String> = self.domains.keys().collect();
        domains.sort();
        domains
            .into_iter()
            .map(|d| CacheKey::Domain(d.clone()))
            .chain(std::iter::once(CacheKey::Default))
            .collect()
    }

    /// Iterate over every entry, including the default one.
    pub fn iter(&self) -> impl Iterator<Item = (CacheKey, &Bundle)> {
        self.domains
            .iter()
            .map(|(domain, bundle)| (CacheKey::Domain(domain.clone()), bundle))
            .chain(std::iter::once((CacheKey::Default, &self.default)))
    }

    /// Number of entries, counting the default one.
    pub fn len(&self) -> usize {
        self.domains.len() + 1
    }

    /// Always false; the default entry is always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}
