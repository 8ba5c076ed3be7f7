//! [`ProfileDir`] builder for resolver test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use domconf_store::DirectoryStore;
use tempfile::TempDir;

/// A temporary profile directory with helpers for writing profile files.
///
/// # Example
///
/// ```rust,no_run
/// use domconf_test_utils::ProfileDir;
///
/// let dir = ProfileDir::new()
///     .descriptor("acme:acme.example.com", &[("acme", "sales,eng")])
///     .properties("default", &[("smtp.host", "localhost")])
///     .properties("acme_sales", &[("smtp.host", "sales.mail")]);
/// let store = dir.store();
/// ```
pub struct ProfileDir {
    temp_dir: TempDir,
}

impl Default for ProfileDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `file` inside the directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.root().join(file)
    }

    /// A [`DirectoryStore`] over this directory with default formats.
    pub fn store(&self) -> DirectoryStore {
        DirectoryStore::new(self.root())
    }

    /// Write `env.properties` with the given `domain` value and alias keys.
    pub fn descriptor(self, domain: &str, aliases: &[(&str, &str)]) -> Self {
        let mut entries = vec![("domain", domain)];
        entries.extend_from_slice(aliases);
        self.properties("env", &entries)
    }

    /// Write `<profile>.properties` from key-value pairs.
    ///
    /// Values are written verbatim, so callers can exercise escapes and
    /// continuations directly.
    pub fn properties(self, profile: &str, entries: &[(&str, &str)]) -> Self {
        let content: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        self.raw(&format!("{profile}.properties"), &content)
    }

    /// Write an arbitrary file, e.g. `foo_ops.toml`.
    pub fn raw(self, file: &str, content: &str) -> Self {
        fs::write(self.path(file), content)
            .unwrap_or_else(|e| panic!("ProfileDir::raw: could not write {file}: {e}"));
        self
    }

    /// Remove a previously written file.
    pub fn remove(self, file: &str) -> Self {
        fs::remove_file(self.path(file))
            .unwrap_or_else(|e| panic!("ProfileDir::remove: could not remove {file}: {e}"));
        self
    }
}
