//! Request bodies for the account endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message for an incomplete registration body.
pub const REGISTER_INCOMPLETE: &str =
    "Request body incomplete - both email and password are required";

/// Message for an incomplete login body.
pub const LOGIN_INCOMPLETE: &str = "Request body incomplete - email and password needed";

/// Message for a refresh or logout body without a token.
pub const TOKEN_INCOMPLETE: &str = "Request body incomplete, refresh token required";

/// `POST /user/register` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// `POST /user/login` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    /// Accepted for compatibility; has no effect.
    #[serde(default)]
    pub long_expiry: Option<serde_json::Value>,
    /// Requested bearer lifetime; see [`LoginRequest::bearer_ttl`].
    #[serde(default)]
    pub bearer_expires_in_seconds: Option<serde_json::Value>,
    /// Requested refresh lifetime; see [`LoginRequest::refresh_ttl`].
    #[serde(default)]
    pub refresh_expires_in_seconds: Option<serde_json::Value>,
}

impl LoginRequest {
    /// Bearer lifetime to issue with, or `None` for the 600 s default.
    pub fn bearer_ttl(&self) -> Option<i64> {
        positive_seconds(self.bearer_expires_in_seconds.as_ref())
    }

    /// Refresh lifetime to issue with, or `None` for the 86400 s default.
    pub fn refresh_ttl(&self) -> Option<i64> {
        positive_seconds(self.refresh_expires_in_seconds.as_ref())
    }
}

/// A positive JSON integer; fractions, strings and out-of-range numbers
/// yield `None`.
fn positive_seconds(value: Option<&serde_json::Value>) -> Option<i64> {
    value
        .and_then(serde_json::Value::as_i64)
        .filter(|seconds| *seconds > 0)
}

/// `POST /user/refresh` and `POST /user/logout` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// The refresh token.
    #[validate(required, length(min = 1))]
    pub refresh_token: Option<String>,
}
