//! Offline license cache.
//!
//! A single text file holding the last license that the server accepted.
//! One credential per installation.

use crate::error::{LicenseError, LicenseResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store for the last validated license key.
#[derive(Debug, Clone)]
pub struct LicenseCache {
    path: PathBuf,
}

impl LicenseCache {
    /// Creates a cache backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached license.
    ///
    /// Returns `Ok(None)` if the file does not exist or holds only whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::CacheUnavailable`] if the file exists but
    /// cannot be read.
    pub fn load(&self) -> LicenseResult<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LicenseError::CacheUnavailable(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let license = content.trim();
        if license.is_empty() {
            return Ok(None);
        }

        debug!(path = %self.path.display(), "license loaded from cache");
        Ok(Some(license.to_string()))
    }

    /// Overwrites the cache with `license`.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::CacheUnavailable`] if the file cannot be written.
    pub fn save(&self, license: &str) -> LicenseResult<()> {
        fs::write(&self.path, license.as_bytes()).map_err(|e| {
            LicenseError::CacheUnavailable(format!("write {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "license cached");
        Ok(())
    }
}
