//! License authentication client for Vortex.
//!
//! This crate handles:
//! - Hardware fingerprinting for device binding
//! - Online license validation against the Vortex license server
//! - Offline caching of the last validated license for quick login
//! - The process's authenticated/unauthenticated session state
//!
//! # Usage
//!
//! The host computes the fingerprint once and owns the session:
//!
//! ```no_run
//! use vortex_auth::{AuthClient, AuthConfig, DeviceFingerprint, Session};
//!
//! # async fn run() -> vortex_auth::LicenseResult<()> {
//! let session = Session::new();
//! let client = AuthClient::new(AuthConfig::default(), DeviceFingerprint::generate(), session.clone())?;
//!
//! if !client.quick_login("steve").await.is_valid() {
//!     client.register_license("ABCD-1234", "steve").await;
//! }
//! println!("authenticated: {}", session.is_authenticated());
//! # Ok(())
//! # }
//! ```

mod cache;
mod client;
mod config;
mod device;
mod error;
mod protocol;
mod session;

pub use cache::LicenseCache;
pub use client::AuthClient;
pub use config::{AuthConfig, DEFAULT_SERVER_URL, LICENSE_FILE_PATH, VALIDATE_ENDPOINT};
pub use device::{DeviceFingerprint, DeviceInfo, UNKNOWN_FINGERPRINT};
pub use error::{LicenseError, LicenseResult};
pub use protocol::{
    ValidationRequest, ValidationResult, LOGIN_MODE, NO_CACHED_LICENSE, UNKNOWN_REASON,
};
pub use session::Session;
