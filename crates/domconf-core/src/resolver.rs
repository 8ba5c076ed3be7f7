//! Recipient resolution
//!
//! A [`DomainResolver`] answers two separate questions about a recipient:
//!
//! - [`resolve_profile_name`](DomainResolver::resolve_profile_name): which
//!   profile is *declared* for its domain, scanning the domain table.
//! - [`resolve_bundle`](DomainResolver::resolve_bundle): which *loaded*
//!   bundle is cached under its domain.
//!
//! The answers can differ. A personal identifier declared in the descriptor
//! always yields a profile name, but only yields a bundle when the store held
//! that profile at [`init`](DomainResolver::init) time. Unqualified host
//! suffixes resolve to the default profile name, yet have no cached bundle;
//! the default bundle must be requested explicitly.

use domconf_store::{Bundle, ConfigStore};

use crate::cache::BundleCache;
use crate::config::ResolverConfig;
use crate::descriptor::EnvironmentDescriptor;
use crate::domain::{DomainMapping, DomainTable};
use crate::recipient::Recipient;
use crate::{Error, Result};

/// Resolves recipients against one root descriptor.
///
/// # Example
///
/// ```
/// use domconf_core::DomainResolver;
/// use domconf_store::MemoryStore;
///
/// let store = MemoryStore::new()
///     .with_profile("env", [("domain", "acme:acme.example.com"), ("acme", "sales,eng")])
///     .with_profile("default", [("smtp.host", "localhost")])
///     .with_profile("acme_sales", [("smtp.host", "sales.mail")]);
///
/// let mut resolver = DomainResolver::new(store)?;
/// resolver.init()?;
///
/// assert_eq!(resolver.resolve_profile_name("x@eng.acme.example.com")?, Some("acme_eng"));
/// assert!(resolver.resolve_bundle("x@eng.acme.example.com")?.is_none());
/// assert_eq!(
///     resolver.resolve_bundle("x@sales.acme.example.com")?.and_then(|b| b.get("smtp.host")),
///     Some("sales.mail")
/// );
/// # Ok::<(), domconf_core::Error>(())
/// ```
#[derive(Debug)]
pub struct DomainResolver<S> {
    store: S,
    config: ResolverConfig,
    descriptor: EnvironmentDescriptor,
    table: DomainTable,
    cache: Option<BundleCache>,
}

impl<S: ConfigStore> DomainResolver<S> {
    /// Load the descriptor and build the domain table with default profile
    /// names.
    pub fn new(store: S) -> Result<Self> {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Load the descriptor and build the domain table.
    ///
    /// The bundle cache is not built until [`init`](Self::init).
    pub fn with_config(store: S, config: ResolverConfig) -> Result<Self> {
        let descriptor = EnvironmentDescriptor::load(&store, &config.descriptor_profile)?;
        let table = DomainTable::build(&descriptor, &config.default_profile)?;
        Ok(Self {
            store,
            config,
            descriptor,
            table,
            cache: None,
        })
    }

    /// [`new`](Self::new) followed by [`init`](Self::init).
    pub fn open(store: S) -> Result<Self> {
        let mut resolver = Self::new(store)?;
        resolver.init()?;
        Ok(resolver)
    }

    /// Build the bundle cache.
    ///
    /// Runs once; later calls return immediately without touching the store.
    /// On failure the resolver stays uninitialized and `init` may be retried.
    pub fn init(&mut self) -> Result<()> {
        if self.cache.is_some() {
            tracing::debug!("Bundle cache already initialized");
            return Ok(());
        }
        let cache = BundleCache::build(&self.store, &self.descriptor, &self.config.default_profile)?;
        self.cache = Some(cache);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.cache.is_some()
    }
}

impl<S> DomainResolver<S> {
    /// Name of the first declared profile whose domain matches the
    /// recipient's, compared case-insensitively.
    ///
    /// `Ok(None)` means no declared domain matches.
    pub fn resolve_profile_name(&self, recipient: &str) -> Result<Option<&str>> {
        let recipient = Recipient::parse(recipient)?;
        let found = self.table.find(recipient.domain());
        tracing::debug!(
            domain = recipient.domain(),
            profile = found.map(|m| m.profile_name.as_str()),
            "Resolved profile name"
        );
        Ok(found.map(|m| m.profile_name.as_str()))
    }

    /// Bundle cached under the recipient's exact domain.
    ///
    /// Never falls back to the default bundle; use
    /// [`default_bundle`](Self::default_bundle) for that.
    pub fn resolve_bundle(&self, recipient: &str) -> Result<Option<&Bundle>> {
        let recipient = Recipient::parse(recipient)?;
        let cache = self.cache.as_ref().ok_or(Error::NotInitialized)?;
        Ok(cache.get_domain(recipient.domain()))
    }

    /// The bundle loaded from the default profile.
    pub fn default_bundle(&self) -> Result<&Bundle> {
        self.cache
            .as_ref()
            .map(BundleCache::default_bundle)
            .ok_or(Error::NotInitialized)
    }

    /// The expanded domain table, in declaration order.
    pub fn domain_mappings(&self) -> &[DomainMapping] {
        self.table.mappings()
    }

    pub fn domain_table(&self) -> &DomainTable {
        &self.table
    }

    pub fn descriptor(&self) -> &EnvironmentDescriptor {
        &self.descriptor
    }

    /// The bundle cache, once [`init`](DomainResolver::init) has run.
    pub fn bundle_cache(&self) -> Option<&BundleCache> {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
