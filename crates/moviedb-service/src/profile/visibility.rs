//! Which profile fields a caller may see or change.

use chrono::NaiveDate;
use serde::Serialize;

use moviedb_auth::gate::{GateError, VerifiedIdentity};
use moviedb_core::error::AppError;
use moviedb_entity::user::User;

/// Profile as returned to a caller.
///
/// `private` is omitted entirely for anyone but the owner; when present,
/// its fields serialize as `null` if unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub private: Option<PrivateFields>,
}

/// Owner-only profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateFields {
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
}

/// Field redaction and write authorization for profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileVisibility;

impl ProfileVisibility {
    /// Renders `user` for `viewer`, dropping `dob` and `address` unless the
    /// viewer is the account owner.
    pub fn view(user: &User, viewer: Option<&VerifiedIdentity>) -> ProfileView {
        let is_owner = viewer.is_some_and(|identity| identity.owns(&user.email));

        ProfileView {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            private: is_owner.then(|| PrivateFields {
                dob: user.dob,
                address: user.address.clone(),
            }),
        }
    }

    /// Allows a write only by the owner of `owner_email`.
    pub fn authorize_write(
        viewer: Option<&VerifiedIdentity>,
        owner_email: &str,
    ) -> Result<(), AppError> {
        match viewer {
            None => Err(GateError::MissingAuthorization.into()),
            Some(identity) if identity.owns(owner_email) => Ok(()),
            Some(_) => Err(AppError::authorization("Forbidden")),
        }
    }
}
