//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use moviedb_core::error::{AppError, ErrorKind};

/// Message returned for server faults that carry no public message.
pub const GENERIC_INTERNAL: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `true`.
    pub error: bool,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on service results.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Status code for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The message a client is allowed to see.
///
/// Server faults only expose a message that was set with
/// [`AppError::or_internal`], recognisable by its wrapped `AppError` cause.
fn public_message(err: &AppError) -> &str {
    if !err.kind.is_server_fault() {
        return &err.message;
    }

    let relabelled = err.kind == ErrorKind::Internal
        && err
            .source
            .as_deref()
            .is_some_and(|cause| cause.is::<AppError>());

    if relabelled {
        &err.message
    } else {
        GENERIC_INTERNAL
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if err.kind.is_server_fault() {
            tracing::error!(kind = %err.kind, "Request failed with a server fault");
            tracing::debug!(error = %err, cause = ?err.source, "Server fault detail");
        }

        let body = ApiErrorResponse {
            error: true,
            message: public_message(&err).to_string(),
        };

        (status, Json(body)).into_response()
    }
}
