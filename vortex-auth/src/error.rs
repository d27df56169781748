//! Error types for the authentication client.

use thiserror::Error;

/// Authentication-specific errors.
///
/// None of these escape the public `AuthClient` operations: they are folded
/// into a [`ValidationResult`](crate::ValidationResult) at that boundary.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// A machine property needed for the fingerprint could not be read.
    #[error("fingerprint unavailable: {0}")]
    FingerprintUnavailable(String),

    /// The local license cache could not be read or written.
    #[error("license cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Request construction or transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The validation service answered with something other than 200 OK.
    #[error("unexpected status from validation service: {0}")]
    UnexpectedStatus(u16),

    /// Response body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body is valid JSON but not the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Client settings are unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
