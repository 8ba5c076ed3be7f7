//! Shared test utilities for the domconf workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`profiles`]: [`ProfileDir`] builder for on-disk profile directories
//! - [`logging`]: tracing subscriber setup for tests

pub mod logging;
pub mod profiles;

pub use profiles::ProfileDir;
