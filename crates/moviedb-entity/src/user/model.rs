//! User account model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account, keyed by its case-sensitive email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique, case-sensitive account identifier.
    pub email: String,
    /// Argon2 password hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Date of birth.
    pub dob: Option<NaiveDate>,
    /// Free-text postal address.
    pub address: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a freshly registered account with no profile fields.
    pub fn from_new(new: NewUser) -> Self {
        let now = Utc::now();
        Self {
            email: new.email,
            password_hash: new.password_hash,
            first_name: None,
            last_name: None,
            dob: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a profile update in place.
    pub fn apply(&mut self, changes: ProfileChanges) {
        self.first_name = Some(changes.first_name);
        self.last_name = Some(changes.last_name);
        self.dob = Some(changes.dob);
        self.address = Some(changes.address);
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Account email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// A complete, already validated profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    /// New given name.
    pub first_name: String,
    /// New family name.
    pub last_name: String,
    /// New date of birth.
    pub dob: NaiveDate,
    /// New postal address.
    pub address: String,
}
