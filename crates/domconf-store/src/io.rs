//! Text I/O for profile files

use std::fs;
use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Check whether a regular file exists at `path`.
///
/// A missing file is `Ok(false)`; metadata failures other than `NotFound`
/// (e.g. permission denied on the directory) are reported as errors.
pub fn file_exists(path: &NormalizedPath) -> Result<bool> {
    let native_path = path.to_native();
    match fs::metadata(&native_path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}
