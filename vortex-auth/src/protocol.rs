//! Wire types for the validation endpoint.
//!
//! Request (`POST {server_url}/auth/validate`, `application/json`):
//!
//! ```json
//! { "hwid": "<64 hex chars>", "license_key": "...", "username": "...", "mode": "login" }
//! ```
//!
//! Response (200 OK): `{ "valid": true }` or `{ "valid": false, "error": "..." }`.

use crate::device::DeviceFingerprint;
use crate::error::{LicenseError, LicenseResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Mode sent with every validation request.
pub const LOGIN_MODE: &str = "login";

/// Reason reported when the server rejects a key without saying why.
pub const UNKNOWN_REASON: &str = "unknown error";

/// Reason reported by quick login when there is nothing cached.
pub const NO_CACHED_LICENSE: &str = "no cached license";

/// Snapshot sent to the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    hwid: String,
    license_key: String,
    username: String,
    mode: String,
}

impl ValidationRequest {
    /// Builds a login request.
    #[must_use]
    pub fn login(fingerprint: &DeviceFingerprint, license_key: &str, username: &str) -> Self {
        Self {
            hwid: fingerprint.id().to_string(),
            license_key: license_key.to_string(),
            username: username.to_string(),
            mode: LOGIN_MODE.to_string(),
        }
    }

    #[must_use]
    pub fn hwid(&self) -> &str {
        &self.hwid
    }

    #[must_use]
    pub fn license_key(&self) -> &str {
        &self.license_key
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidationResponse {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResponse {
    /// Decodes a response body.
    ///
    /// The body must be a JSON object. A missing or null `valid` is false; any
    /// other non-boolean `valid` is malformed. A non-string `error` is kept as
    /// its JSON text.
    pub fn parse(body: &[u8]) -> LicenseResult<Self> {
        let fields = match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => fields,
            other => {
                return Err(LicenseError::MalformedResponse(format!(
                    "expected JSON object, got {}",
                    json_kind(&other)
                )));
            }
        };

        let valid = match fields.get("valid") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(valid)) => *valid,
            Some(other) => {
                return Err(LicenseError::MalformedResponse(format!(
                    "`valid` must be a boolean, got {}",
                    json_kind(other)
                )));
            }
        };

        let error = match fields.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(reason)) => Some(reason.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(Self { valid, error })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of a single validation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The server accepted the license.
    Valid,
    /// The server rejected the license, or there was nothing to validate.
    Invalid(String),
    /// The request failed or the response was unusable.
    TransportError(String),
}

impl ValidationResult {
    /// Returns true only for [`ValidationResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Human-readable reason for a failed validation.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) | Self::TransportError(reason) => Some(reason),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(reason) => write!(f, "invalid: {reason}"),
            Self::TransportError(cause) => write!(f, "transport error: {cause}"),
        }
    }
}
