//! Online license validation.
//!
//! Sends the device fingerprint and license key to the validation service,
//! updates the [`Session`] and caches the key on success. Every public
//! operation returns a [`ValidationResult`]; errors never reach the caller.

use crate::cache::LicenseCache;
use crate::config::AuthConfig;
use crate::device::{prefix, DeviceFingerprint};
use crate::error::{LicenseError, LicenseResult};
use crate::protocol::{
    ValidationRequest, ValidationResponse, ValidationResult, NO_CACHED_LICENSE, UNKNOWN_REASON,
};
use crate::session::Session;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// License authentication client.
///
/// Clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct AuthClient {
    config: AuthConfig,
    client: Client,
    fingerprint: DeviceFingerprint,
    cache: LicenseCache,
    session: Session,
}

impl AuthClient {
    /// Creates a client bound to `fingerprint` that reports into `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(
        config: AuthConfig,
        fingerprint: DeviceFingerprint,
        session: Session,
    ) -> LicenseResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let cache = LicenseCache::new(config.license_path.clone());
        info!(
            server = %config.server_url,
            hwid = fingerprint.short(),
            "license client initialized"
        );

        Ok(Self {
            config,
            client,
            fingerprint,
            cache,
            session,
        })
    }

    /// Validates `license_key` for `username` against the server.
    ///
    /// On success the session is marked authenticated and the key is cached.
    /// A single attempt is made; there is no retry.
    pub async fn authenticate(&self, license_key: &str, username: &str) -> ValidationResult {
        let request = ValidationRequest::login(&self.fingerprint, license_key, username);

        let response = match self.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "license validation request failed");
                return ValidationResult::TransportError(e.to_string());
            }
        };

        if !response.valid {
            let reason = response.error.unwrap_or_else(|| UNKNOWN_REASON.to_string());
            warn!(reason = %reason, "license rejected");
            return ValidationResult::Invalid(reason);
        }

        info!(key_prefix = prefix(license_key, 8), "authentication successful");
        self.session.record_success(license_key);
        if let Err(e) = self.cache.save(license_key) {
            warn!(error = %e, "failed to cache license");
        }

        ValidationResult::Valid
    }

    /// Validates the cached license, if there is one.
    ///
    /// Without a cached license this returns `Invalid("no cached license")`
    /// without touching the network.
    pub async fn quick_login(&self, username: &str) -> ValidationResult {
        match self.cache.load() {
            Ok(Some(license_key)) => self.authenticate(&license_key, username).await,
            Ok(None) => {
                debug!("no cached license");
                ValidationResult::Invalid(NO_CACHED_LICENSE.to_string())
            }
            Err(e) => {
                warn!(error = %e, "failed to read license cache");
                ValidationResult::Invalid(NO_CACHED_LICENSE.to_string())
            }
        }
    }

    /// Registers a license key supplied by the user.
    ///
    /// The server tells registration and login apart by content, so this
    /// sends the same `login` request as [`authenticate`](Self::authenticate).
    pub async fn register_license(&self, license_key: &str, username: &str) -> ValidationResult {
        self.authenticate(license_key, username).await
    }

    /// Returns true if the session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Overrides the session's authenticated flag.
    pub fn set_authenticated(&self, authenticated: bool) {
        self.session.set_authenticated(authenticated);
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The fingerprint sent with every request.
    #[must_use]
    pub fn fingerprint(&self) -> &DeviceFingerprint {
        &self.fingerprint
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn cache(&self) -> &LicenseCache {
        &self.cache
    }

    async fn send(&self, request: &ValidationRequest) -> LicenseResult<ValidationResponse> {
        let url = self.config.validate_url();
        debug!(url = %url, hwid = self.fingerprint.short(), "validating license");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LicenseError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        ValidationResponse::parse(&body)
    }
}
