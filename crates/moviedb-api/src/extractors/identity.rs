//! Identity extractors backed by the authorization gate.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use moviedb_auth::gate::VerifiedIdentity;

use crate::error::ApiError;
use crate::state::AppState;

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Caller proven by a valid `Authorization: Bearer <token>` header.
///
/// Rejects the request with 401 and the gate's message otherwise.
#[derive(Debug, Clone)]
pub struct BearerIdentity(pub VerifiedIdentity);

impl std::ops::Deref for BearerIdentity {
    type Target = VerifiedIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for BearerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = state
            .gate
            .authorize(authorization_header(parts))
            .map_err(|e| ApiError(e.into()))?;

        Ok(BearerIdentity(identity))
    }
}

/// Caller identity when a valid bearer token is present, anonymous otherwise.
///
/// Never rejects.
#[derive(Debug, Clone, Default)]
pub struct OptionalIdentity(pub Option<VerifiedIdentity>);

impl OptionalIdentity {
    /// The identity, if any.
    pub fn identity(&self) -> Option<&VerifiedIdentity> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for OptionalIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(
            state.gate.identify(authorization_header(parts)),
        ))
    }
}
