//! Scenario tests: store failures, shared resolvers, and swapped backends.

use domconf_core::{DomainResolver, Error};
use domconf_store::{Bundle, ConfigStore, MemoryStore};
use domconf_test_utils::{ProfileDir, logging};
use std::sync::Arc;
use std::thread;

/// Wraps a store and fails every call for one profile with an I/O error.
#[derive(Debug)]
struct FailingStore {
    inner: MemoryStore,
    broken: &'static str,
}

impl FailingStore {
    fn failure(&self) -> domconf_store::Error {
        domconf_store::Error::io(
            format!("/profiles/{}.properties", self.broken),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        )
    }
}

impl ConfigStore for FailingStore {
    fn load(&self, profile: &str) -> domconf_store::Result<Bundle> {
        if profile == self.broken {
            return Err(self.failure());
        }
        self.inner.load(profile)
    }

    fn exists(&self, profile: &str) -> domconf_store::Result<bool> {
        if profile == self.broken {
            return Err(self.failure());
        }
        self.inner.exists(profile)
    }
}

fn acme_memory_store() -> MemoryStore {
    MemoryStore::new()
        .with_profile(
            "env",
            [("domain", "acme:acme.example.com"), ("acme", "sales,eng")],
        )
        .with_profile("default", [("role", "default")])
        .with_profile("acme_sales", [("role", "sales")])
}

#[test]
fn test_existence_check_failure_aborts_init() {
    logging::init();
    let store = FailingStore {
        inner: acme_memory_store(),
        broken: "acme_eng",
    };
    let mut resolver = DomainResolver::new(store).unwrap();

    let err = resolver.init().unwrap_err();
    match err {
        Error::ConfigStore(inner) => assert!(!inner.is_not_found()),
        other => panic!("expected ConfigStore error, got {other:?}"),
    }
    assert!(!resolver.is_initialized());
}

#[test]
fn test_descriptor_failure_aborts_construction() {
    let store = FailingStore {
        inner: acme_memory_store(),
        broken: "env",
    };
    let err = DomainResolver::new(store).unwrap_err();
    assert!(matches!(
        err,
        Error::ConfigStore(domconf_store::Error::Io { .. })
    ));
}

#[test]
fn test_shared_resolver_across_threads() {
    let dir = ProfileDir::new()
        .descriptor("acme:acme.example.com", &[("acme", "sales,eng")])
        .properties("default", &[("role", "default")])
        .properties("acme_sales", &[("role", "sales")]);
    let resolver = Arc::new(DomainResolver::open(dir.store()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let recipient = format!("user{i}@sales.acme.example.com");
                let name = resolver.resolve_profile_name(&recipient).unwrap().map(str::to_string);
                let bundle = resolver
                    .resolve_bundle(&recipient)
                    .unwrap()
                    .map(|b| b.profile().to_string());
                (name, bundle)
            })
        })
        .collect();

    for handle in handles {
        let (name, bundle) = handle.join().unwrap();
        assert_eq!(name.as_deref(), Some("acme_sales"));
        assert_eq!(bundle.as_deref(), Some("acme_sales"));
    }
}

#[test]
fn test_boxed_store_backend() {
    let store: Box<dyn ConfigStore> = Box::new(acme_memory_store());
    let resolver = DomainResolver::open(store).unwrap();

    assert_eq!(
        resolver.resolve_profile_name("x@eng.acme.example.com").unwrap(),
        Some("acme_eng")
    );
    assert!(resolver.resolve_bundle("x@eng.acme.example.com").unwrap().is_none());
}

#[test]
fn test_memory_and_directory_stores_agree() {
    let dir = ProfileDir::new()
        .descriptor("acme:acme.example.com", &[("acme", "sales,eng")])
        .properties("default", &[("role", "default")])
        .properties("acme_sales", &[("role", "sales")]);

    let on_disk = DomainResolver::open(dir.store()).unwrap();
    let in_memory = DomainResolver::open(acme_memory_store()).unwrap();

    assert_eq!(on_disk.domain_mappings(), in_memory.domain_mappings());
    for recipient in [
        "x@acme.example.com",
        "x@sales.acme.example.com",
        "x@eng.acme.example.com",
        "x@other.example.com",
    ] {
        assert_eq!(
            on_disk.resolve_profile_name(recipient).unwrap(),
            in_memory.resolve_profile_name(recipient).unwrap()
        );
        assert_eq!(
            on_disk.resolve_bundle(recipient).unwrap(),
            in_memory.resolve_bundle(recipient).unwrap()
        );
    }
}
