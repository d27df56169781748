//! Device fingerprinting for license binding.
//!
//! Derives a stable hardware ID (HWID) from OS name, architecture, OS version
//! and the current user name. This is a best-effort machine binding, not a
//! secret: if any property is missing the fingerprint degrades to
//! [`UNKNOWN_FINGERPRINT`] instead of failing.

use crate::error::{LicenseError, LicenseResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::env;
use std::fmt;
use tracing::{debug, warn};

/// Sentinel fingerprint used when the device cannot be identified.
pub const UNKNOWN_FINGERPRINT: &str = "UNKNOWN";

/// Information about the current device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Operating system name.
    pub os_name: String,
    /// CPU architecture.
    pub arch: String,
    /// Operating system version.
    pub os_version: String,
    /// Name of the user running this process.
    pub username: String,
}

impl DeviceInfo {
    /// Collects information about the current device.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::FingerprintUnavailable`] naming the first
    /// property that could not be read.
    pub fn collect() -> LicenseResult<Self> {
        let os_version = get_os_version()
            .ok_or_else(|| LicenseError::FingerprintUnavailable("os version".to_string()))?;
        let username = get_username()
            .ok_or_else(|| LicenseError::FingerprintUnavailable("user name".to_string()))?;

        Ok(Self {
            os_name: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            os_version,
            username,
        })
    }

    fn is_complete(&self) -> bool {
        [&self.os_name, &self.arch, &self.os_version, &self.username]
            .iter()
            .all(|s| !s.is_empty())
    }
}

/// A stable fingerprint that identifies this device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceFingerprint {
    id: String,
}

impl DeviceFingerprint {
    /// Generates the fingerprint for the current device.
    ///
    /// Never fails. Call it once at startup and hand the value to
    /// [`AuthClient::new`](crate::AuthClient::new).
    #[must_use]
    pub fn generate() -> Self {
        match DeviceInfo::collect() {
            Ok(info) => Self::from_info(&info),
            Err(e) => {
                warn!(error = %e, "HWID generation failed, using sentinel");
                Self::unknown()
            }
        }
    }

    /// Derives the fingerprint from already collected device information.
    ///
    /// SHA-256 over `os_name + arch + os_version + username`, lowercase hex.
    #[must_use]
    pub fn from_info(info: &DeviceInfo) -> Self {
        if !info.is_complete() {
            warn!("incomplete device info, using sentinel HWID");
            return Self::unknown();
        }

        let mut hasher = Sha256::new();
        hasher.update(info.os_name.as_bytes());
        hasher.update(info.arch.as_bytes());
        hasher.update(info.os_version.as_bytes());
        hasher.update(info.username.as_bytes());
        let id = hex::encode(hasher.finalize());

        let fp = Self { id };
        debug!(hwid = fp.short(), "generated HWID");
        fp
    }

    /// The sentinel fingerprint.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_FINGERPRINT.to_string(),
        }
    }

    /// Returns true if this is the sentinel value.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_FINGERPRINT
    }

    /// Returns the fingerprint ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First 8 characters, for logs.
    #[must_use]
    pub fn short(&self) -> &str {
        prefix(&self.id, 8)
    }
}

impl fmt::Display for DeviceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Returns at most `n` leading characters of `s`.
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn get_username() -> Option<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .ok()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
}

/// Gets the OS version string.
fn get_os_version() -> Option<String> {
    #[cfg(target_os = "macos")]
    let version = std::process::Command::new("sw_vers")
        .arg("-productVersion")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok());

    #[cfg(target_os = "windows")]
    let version = std::process::Command::new("cmd")
        .args(["/C", "ver"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok());

    // Kernel release, e.g. "6.8.0-45-generic"
    #[cfg(target_os = "linux")]
    let version = std::fs::read_to_string("/proc/sys/kernel/osrelease").ok();

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    let version: Option<String> = None;

    version
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
