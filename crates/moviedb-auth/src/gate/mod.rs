//! Authorization gate for protected requests.
//!
//! Turns the raw `Authorization` header into a [`VerifiedIdentity`] or a
//! [`GateError`]. Framework glue lives in the API crate; this module only
//! knows about header values and tokens.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use moviedb_core::error::AppError;

use crate::jwt::{TokenError, TokenService};

/// Required prefix of the `Authorization` header value.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Identity proven by a valid token, scoped to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Email of the authenticated account.
    pub email: String,
}

impl VerifiedIdentity {
    /// Whether this identity owns the account with `email`.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}

/// Rejections produced by the gate. The display strings are the messages
/// returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// No header, or a header without the `Bearer ` prefix.
    #[error("Authorization header ('Bearer token') not found")]
    MissingAuthorization,
    /// The token verified but has expired.
    #[error("JWT token has expired")]
    TokenExpired,
    /// The token was signed with a different secret.
    #[error("Invalid JWT token")]
    InvalidToken,
    /// The token could not be decoded at all.
    #[error("Authorization header is malformed")]
    MalformedAuthorization,
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        AppError::authentication(err.to_string())
    }
}

/// Checks bearer tokens on incoming requests.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    tokens: Arc<TokenService>,
}

impl AuthorizationGate {
    /// Creates a gate backed by the given token service.
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authorizes a request from its `Authorization` header value.
    pub fn authorize(&self, header: Option<&str>) -> Result<VerifiedIdentity, GateError> {
        let token = header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or(GateError::MissingAuthorization)?;

        let claims = self.tokens.verify(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            match e {
                TokenError::Expired => GateError::TokenExpired,
                TokenError::InvalidSignature => GateError::InvalidToken,
                TokenError::Malformed(_) | TokenError::Signing(_) => {
                    GateError::MalformedAuthorization
                }
            }
        })?;

        Ok(VerifiedIdentity {
            email: claims.email,
        })
    }

    /// Best-effort identification for public endpoints.
    ///
    /// Every failure, including an expired or forged token, is treated as an
    /// anonymous caller.
    pub fn identify(&self, header: Option<&str>) -> Option<VerifiedIdentity> {
        self.authorize(header).ok()
    }
}
