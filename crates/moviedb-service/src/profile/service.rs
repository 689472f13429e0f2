//! Profile reads and updates.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use moviedb_auth::gate::VerifiedIdentity;
use moviedb_core::error::AppError;
use moviedb_database::repositories::UserStore;
use moviedb_entity::user::ProfileChanges;

use super::dob::parse_dob;
use super::requests::ProfileUpdateRequest;
use super::visibility::{ProfileView, ProfileVisibility};

const USER_NOT_FOUND: &str = "User not found";
const INTERNAL: &str = "Internal server error";

/// Serves profile views and applies owner updates.
#[derive(Debug, Clone)]
pub struct ProfileService {
    store: Arc<dyn UserStore>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Returns the profile of `email` as seen by `viewer`.
    pub async fn get_profile(
        &self,
        email: &str,
        viewer: Option<&VerifiedIdentity>,
    ) -> Result<ProfileView, AppError> {
        let user = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| e.or_internal(INTERNAL))?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        debug!(email = %email, owner = viewer.is_some_and(|v| v.owns(email)), "Profile read");
        Ok(ProfileVisibility::view(&user, viewer))
    }

    /// Replaces all four profile fields of `email`.
    ///
    /// Checks run in order: caller identity, ownership, body shape, date of
    /// birth, then existence of the account.
    pub async fn update_profile(
        &self,
        caller: Option<&VerifiedIdentity>,
        email: &str,
        req: ProfileUpdateRequest,
    ) -> Result<ProfileView, AppError> {
        ProfileVisibility::authorize_write(caller, email)?;

        let fields = req.into_fields()?;
        let dob = parse_dob(&fields.dob, Utc::now().date_naive())?;

        let changes = ProfileChanges {
            first_name: fields.first_name,
            last_name: fields.last_name,
            dob,
            address: fields.address,
        };

        let user = self
            .store
            .update_profile(email, changes)
            .await
            .map_err(|e| e.or_internal(INTERNAL))?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        info!(email = %email, "Profile updated");
        Ok(ProfileVisibility::view(&user, caller))
    }
}
