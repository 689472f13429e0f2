//! Response bodies.

use serde::{Deserialize, Serialize};

use moviedb_auth::jwt::{IssuedToken, TokenPair};

/// One token as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBody {
    pub token: String,
    /// `"Bearer"` or `"Refresh"`.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

impl From<IssuedToken> for TokenBody {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            token_type: issued.kind.label().to_string(),
            expires_in: issued.expires_in,
        }
    }
}

/// Login and refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub bearer_token: TokenBody,
    pub refresh_token: TokenBody,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            bearer_token: pair.bearer.into(),
            refresh_token: pair.refresh.into(),
        }
    }
}

/// Plain `{ "message": ... }` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{ "error": false, "message": ... }` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub error: bool,
    pub message: String,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
