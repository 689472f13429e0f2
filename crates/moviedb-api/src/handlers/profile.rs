//! Profile handlers.

use axum::Json;
use axum::extract::{Path, State};

use moviedb_service::{ProfileView, ProfileVisibility};

use crate::dto::request::ProfileUpdateRequest;
use crate::error::ApiError;
use crate::extractors::{BearerIdentity, JsonBody, OptionalIdentity};
use crate::state::AppState;

/// GET /user/{email}/profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    viewer: OptionalIdentity,
) -> Result<Json<ProfileView>, ApiError> {
    let view = state.profiles.get_profile(&email, viewer.identity()).await?;
    Ok(Json(view))
}

/// PUT /user/{email}/profile
///
/// The body is only looked at once the caller is known to own the profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    caller: BearerIdentity,
    body: Result<JsonBody<ProfileUpdateRequest>, ApiError>,
) -> Result<Json<ProfileView>, ApiError> {
    ProfileVisibility::authorize_write(Some(&caller.0), &email)?;
    let JsonBody(req) = body?;

    let view = state
        .profiles
        .update_profile(Some(&caller.0), &email, req)
        .await?;
    Ok(Json(view))
}
