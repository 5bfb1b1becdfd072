//! Filesystem plumbing: idempotent directory creation, first-writer-wins
//! file seeding, and skip-if-present recursive directory copy.
//!
//! Existence checks are not atomic with respect to concurrent invocations;
//! single-instance execution is a precondition of the bootstrap.

use crate::error::BootstrapError;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Create a directory and all missing parents. No error if already present.
pub fn ensure_dir(path: &Path) -> Result<(), BootstrapError> {
    fs::create_dir_all(path).map_err(|e| BootstrapError::io(path, e))
}

/// Write `content` to `path` only if the path does not already exist.
/// Existing files are left byte-for-byte untouched. Returns whether a write
/// occurred.
pub fn write_if_missing(path: &Path, content: &str) -> Result<bool, BootstrapError> {
    if path.exists() {
        debug!("Skipping write, file already exists: {}", path.display());
        return Ok(false);
    }
    fs::write(path, content).map_err(|e| BootstrapError::io(path, e))?;
    Ok(true)
}

/// Recursively copy `src` to `dst`, only when `src` exists and `dst` does
/// not. Returns whether a copy occurred. No overwrite, no merge: a present
/// destination is left exactly as found.
pub fn copy_dir_if_missing(src: &Path, dst: &Path) -> Result<bool, BootstrapError> {
    if !src.exists() {
        debug!("Skipping copy, source missing: {}", src.display());
        return Ok(false);
    }
    if dst.exists() {
        debug!("Skipping copy, destination present: {}", dst.display());
        return Ok(false);
    }
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| BootstrapError::io(src, e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| BootstrapError::Config(format!(
                "Walked path {} escapes copy root {}: {}",
                entry.path().display(),
                src.display(),
                e
            )))?;
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BootstrapError::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| BootstrapError::io(&target, e))?;
        }
    }
    Ok(true)
}
