//! Profile storage for domconf
//!
//! Defines the [`ConfigStore`] interface the resolver consumes, the loaded
//! [`Bundle`] type, and two backends: [`DirectoryStore`] for profile files on
//! disk and [`MemoryStore`] for embedding and tests.

pub mod bundle;
pub mod directory;
pub mod error;
pub mod io;
pub mod memory;
pub mod path;
pub mod properties;
pub mod store;

pub use bundle::Bundle;
pub use directory::{DirectoryStore, ProfileFormat};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use path::{NormalizedPath, validate_profile_name};
pub use store::ConfigStore;
