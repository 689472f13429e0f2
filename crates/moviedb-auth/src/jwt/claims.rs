//! JWT claims carried by bearer and refresh tokens.

use serde::{Deserialize, Serialize};

/// Default lifetime of a bearer token, in seconds.
pub const BEARER_TTL_SECONDS: i64 = 600;

/// Default lifetime of a refresh token, in seconds.
pub const REFRESH_TTL_SECONDS: i64 = 86_400;

/// Claims payload embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity: the account email.
    pub email: String,
    /// Which credential this token is.
    pub kind: TokenKind,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Whether the token is past its expiry at `now`.
    ///
    /// The expiry second itself is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}

/// Distinguishes bearer tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived credential presented on protected requests.
    Bearer,
    /// Longer-lived credential used to mint new bearer tokens.
    Refresh,
}

impl TokenKind {
    /// Lifetime used when the caller supplies none.
    pub fn default_ttl_seconds(&self) -> i64 {
        match self {
            Self::Bearer => BEARER_TTL_SECONDS,
            Self::Refresh => REFRESH_TTL_SECONDS,
        }
    }

    /// The `token_type` label used in token responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Refresh => "Refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
