//! Token lifecycle: issue, verify, refresh, invalidate.
//!
//! Tokens are stateless. Nothing is recorded server-side when a token is
//! issued, so nothing can be revoked either: [`TokenService::invalidate`]
//! only confirms that the token verifies.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use moviedb_core::config::AuthConfig;

use super::claims::{BEARER_TTL_SECONDS, Claims, REFRESH_TTL_SECONDS, TokenKind};
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use super::error::TokenError;

/// A freshly signed token and the lifetime it was issued with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// Bearer or refresh.
    pub kind: TokenKind,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// A bearer token together with its refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    /// Short-lived bearer token.
    pub bearer: IssuedToken,
    /// Longer-lived refresh token.
    pub refresh: IssuedToken,
}

/// Issues and checks the server's signed tokens.
///
/// Holds the process-wide signing secret; it is fixed at construction.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates a token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_secret(&config.jwt_secret)
    }

    /// Creates a token service for an explicit secret.
    pub fn with_secret(secret: &str) -> Self {
        Self {
            encoder: JwtEncoder::new(secret),
            decoder: JwtDecoder::new(secret),
        }
    }

    /// Issues a token for `email`.
    ///
    /// A missing or non-positive `ttl_seconds` falls back to the default for
    /// `kind` (600 s bearer, 86400 s refresh).
    pub fn issue(
        &self,
        email: &str,
        kind: TokenKind,
        ttl_seconds: Option<i64>,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_at(email, kind, ttl_seconds, Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        email: &str,
        kind: TokenKind,
        ttl_seconds: Option<i64>,
        now: i64,
    ) -> Result<IssuedToken, TokenError> {
        let ttl = ttl_seconds
            .filter(|ttl| *ttl > 0)
            .unwrap_or_else(|| kind.default_ttl_seconds());

        let claims = Claims {
            email: email.to_string(),
            kind,
            iat: now,
            exp: now.saturating_add(ttl),
        };

        Ok(IssuedToken {
            token: self.encoder.encode(&claims)?,
            kind,
            expires_in: ttl,
        })
    }

    /// Issues a bearer and a refresh token for `email`.
    pub fn issue_pair(
        &self,
        email: &str,
        bearer_ttl: Option<i64>,
        refresh_ttl: Option<i64>,
    ) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            bearer: self.issue(email, TokenKind::Bearer, bearer_ttl)?,
            refresh: self.issue(email, TokenKind::Refresh, refresh_ttl)?,
        })
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// The signature is checked first, so a forged token reports
    /// `InvalidSignature` even when its claimed expiry has passed.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = self.decoder.decode(token)?;

        if claims.is_expired_at(now) {
            debug!(email = %claims.email, exp = claims.exp, now, "Token expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Mints a new bearer token from a refresh token.
    ///
    /// The refresh token is not rotated: it comes back unchanged, reported
    /// with the nominal refresh lifetime regardless of how much of it is left.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let claims = self.verify(refresh_token)?;

        Ok(TokenPair {
            bearer: self.issue(&claims.email, TokenKind::Bearer, Some(BEARER_TTL_SECONDS))?,
            refresh: IssuedToken {
                token: refresh_token.to_string(),
                kind: TokenKind::Refresh,
                expires_in: REFRESH_TTL_SECONDS,
            },
        })
    }

    /// Reports whether a refresh token may be "logged out".
    ///
    /// Succeeds whenever the token verifies. No revocation takes place; the
    /// same token keeps working until it expires.
    pub fn invalidate(&self, refresh_token: &str) -> Result<Claims, TokenError> {
        let claims = self.verify(refresh_token)?;
        debug!(email = %claims.email, "Logout acknowledged without revocation");
        Ok(claims)
    }
}
