//! Token failure taxonomy.

use thiserror::Error;

use moviedb_core::error::{AppError, ErrorKind};

/// Why a token could not be issued or verified.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature is valid but the embedded expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The token was not signed with this server's secret.
    #[error("token signature does not match")]
    InvalidSignature,
    /// The token is not a well-formed JWT carrying the expected claims.
    #[error("token is malformed: {0}")]
    Malformed(String),
    /// Signing a new token failed.
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<TokenError> for AppError {
    /// Mapping used by the refresh and logout endpoints, which only tell
    /// "expired" apart from every other rejection.
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::authentication("JWT token has expired"),
            TokenError::InvalidSignature | TokenError::Malformed(_) => {
                AppError::authentication("Invalid JWT token")
            }
            TokenError::Signing(_) => {
                AppError::with_source(ErrorKind::Internal, "Failed to sign token", err)
            }
        }
    }
}
