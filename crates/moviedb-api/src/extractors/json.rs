//! JSON body extractor with fixed per-endpoint 400 messages.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use moviedb_core::error::AppError;

use crate::error::ApiError;

/// A request body type with the message returned when it cannot be parsed.
pub trait RequestBody: DeserializeOwned {
    /// 400 message for an unreadable or wrongly shaped body.
    const MALFORMED: &'static str;
}

/// Like `Json<T>`, but every rejection is a 400 carrying `T::MALFORMED`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: RequestBody,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "Request body rejected");
                Err(ApiError(AppError::validation(T::MALFORMED)))
            }
        }
    }
}
