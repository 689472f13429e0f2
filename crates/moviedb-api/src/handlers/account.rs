//! Account handlers: register, login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest, TokenRequest};
use crate::dto::response::{AckResponse, MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /user/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.accounts.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".to_string(),
        }),
    ))
}

/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let pair = state.accounts.login(req).await?;
    Ok(Json(pair.into()))
}

/// POST /user/refresh
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let pair = state.accounts.refresh(req).await?;
    Ok(Json(pair.into()))
}

/// POST /user/logout
pub async fn logout(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TokenRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state.accounts.logout(req).await?;

    Ok(Json(AckResponse {
        error: false,
        message: "Token successfully invalidated".to_string(),
    }))
}
