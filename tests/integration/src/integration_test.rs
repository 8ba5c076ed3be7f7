//! End-to-end resolution over the checked-in fixture profiles
//!
//! Exercises the complete flow: descriptor load -> domain table -> bundle
//! cache -> recipient resolution, against `test-fixtures/profiles/`.

use domconf_core::{CacheKey, DomainResolver};
use domconf_store::{ConfigStore, DirectoryStore, NormalizedPath};
use domconf_test_utils::logging;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture_store() -> DirectoryStore {
    logging::init();
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/profiles");
    DirectoryStore::new(NormalizedPath::new(root))
}

#[test]
fn test_fixture_descriptor() {
    let resolver = DomainResolver::new(fixture_store()).unwrap();
    let descriptor = resolver.descriptor();

    assert_eq!(
        descriptor.get("domain").unwrap(),
        "rmxdev:rmxdev.lab.example.ac.jp,rmx-keio:rmx-keio.example.net"
    );
    assert_eq!(descriptor.get("rmxdev").unwrap(), "testk,testb");
    assert!(!descriptor.has("rmx-keio"));
}

#[test]
fn test_fixture_profile_names() {
    let resolver = DomainResolver::new(fixture_store()).unwrap();

    let cases = [
        ("taro@rmxdev.lab.example.ac.jp", Some("default")),
        ("taro@testk.rmxdev.lab.example.ac.jp", Some("rmxdev_testk")),
        ("taro@TESTB.rmxdev.lab.example.ac.jp", Some("rmxdev_testb")),
        ("taro@rmx-keio.example.net", Some("default")),
        ("taro@testk.rmx-keio.example.net", None),
        ("taro@example.org", None),
    ];
    for (recipient, expected) in cases {
        assert_eq!(
            resolver.resolve_profile_name(recipient).unwrap(),
            expected,
            "recipient {recipient}"
        );
    }
}

#[test]
fn test_fixture_bundles() {
    let resolver = DomainResolver::open(fixture_store()).unwrap();

    let testk = resolver
        .resolve_bundle("taro@testk.rmxdev.lab.example.ac.jp")
        .unwrap()
        .unwrap();
    assert_eq!(testk.profile(), "rmxdev_testk");
    assert_eq!(testk.get("smtp.port"), Some("587"));
    assert_eq!(testk.get("signature"), Some("Lab K testing desk"));

    let testb = resolver
        .resolve_bundle("taro@testb.rmxdev.lab.example.ac.jp")
        .unwrap()
        .unwrap();
    assert_eq!(testb.get("smtp.host"), Some("relay.rmxdev.lab.example.ac.jp"));

    assert!(resolver.resolve_bundle("taro@rmxdev.lab.example.ac.jp").unwrap().is_none());
    assert!(resolver.resolve_bundle("taro@rmx-keio.example.net").unwrap().is_none());

    let default = resolver.default_bundle().unwrap();
    assert_eq!(default.get("smtp.host"), Some("localhost"));
    assert_eq!(default.get("archive.enabled"), Some("false"));
}

#[test]
fn test_fixture_cache_layout() {
    let resolver = DomainResolver::open(fixture_store()).unwrap();
    let cache = resolver.bundle_cache().unwrap();

    assert_eq!(
        cache.keys(),
        vec![
            CacheKey::Domain("testb.rmxdev.lab.example.ac.jp".into()),
            CacheKey::Domain("testk.rmxdev.lab.example.ac.jp".into()),
            CacheKey::Default,
        ]
    );
}

#[test]
fn test_caller_fallback_to_default_bundle() {
    let resolver = DomainResolver::open(fixture_store()).unwrap();
    let store = resolver.store();

    // A caller picks the personal bundle when cached, otherwise the default.
    let bundle_for = |recipient: &str| {
        resolver
            .resolve_bundle(recipient)
            .unwrap()
            .unwrap_or_else(|| resolver.default_bundle().unwrap())
    };

    assert_eq!(bundle_for("a@testk.rmxdev.lab.example.ac.jp").profile(), "rmxdev_testk");
    assert_eq!(bundle_for("a@rmx-keio.example.net").profile(), "default");
    assert!(store.exists("default").unwrap());
}
