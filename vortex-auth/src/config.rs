//! Client settings.
//!
//! All defaults are build-time constants. Tests point `server_url` at a mock
//! server and `license_path` into a temp directory.

use crate::error::{LicenseError, LicenseResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default validation service location.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Path of the validation endpoint, relative to the server URL.
pub const VALIDATE_ENDPOINT: &str = "/auth/validate";

/// Relative path of the cached license file.
pub const LICENSE_FILE_PATH: &str = "vortex_license.txt";

/// Authentication client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the validation service (e.g. `http://localhost:5000`).
    pub server_url: String,
    /// Endpoint path for license validation.
    pub validate_path: String,
    /// Where the last validated license is cached.
    pub license_path: PathBuf,
    /// Per-request timeout. `None` leaves the transport default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            validate_path: VALIDATE_ENDPOINT.to_string(),
            license_path: PathBuf::from(LICENSE_FILE_PATH),
            request_timeout_secs: None,
        }
    }
}

impl AuthConfig {
    /// Full URL of the validation endpoint.
    #[must_use]
    pub fn validate_url(&self) -> String {
        format!(
            "{}{}",
            self.server_url.trim_end_matches('/'),
            self.validate_path
        )
    }

    /// Request timeout as a [`Duration`], if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Checks that the settings can produce a usable endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Config`] for an empty server URL or a
    /// validation path that does not start with `/`.
    pub fn validate(&self) -> LicenseResult<()> {
        if self.server_url.trim().is_empty() {
            return Err(LicenseError::Config("server_url is empty".to_string()));
        }
        if !self.validate_path.starts_with('/') {
            return Err(LicenseError::Config(format!(
                "validate_path must start with '/': {}",
                self.validate_path
            )));
        }
        Ok(())
    }
}
