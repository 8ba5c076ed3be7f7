//! Recipient-domain profile resolution.
//!
//! A root environment descriptor declares alias groups (`alias:host`) and the
//! personal identifiers under each alias. This crate expands that declaration
//! into a domain table, caches the bundles of the personal profiles that
//! actually exist, and resolves recipient addresses against both.

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod recipient;
pub mod resolver;

pub use cache::{BundleCache, CacheKey};
pub use config::ResolverConfig;
pub use descriptor::{DOMAIN_KEY, EnvironmentDescriptor};
pub use domain::{AliasGroup, DomainMapping, DomainTable};
pub use error::{Error, Result};
pub use recipient::Recipient;
pub use resolver::DomainResolver;
