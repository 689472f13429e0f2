//! Test doubles shared by the service tests.

use async_trait::async_trait;

use moviedb_core::error::AppError;
use moviedb_core::result::AppResult;
use moviedb_database::repositories::UserStore;
use moviedb_entity::user::{NewUser, ProfileChanges, User};

/// Store whose every call fails like a lost database connection.
#[derive(Debug, Default)]
pub struct UnreachableStore;

fn connection_lost() -> AppError {
    AppError::database("connection to server was lost")
}

#[async_trait]
impl UserStore for UnreachableStore {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Err(connection_lost())
    }

    async fn create(&self, _new_user: NewUser) -> AppResult<User> {
        Err(connection_lost())
    }

    async fn update_profile(
        &self,
        _email: &str,
        _changes: ProfileChanges,
    ) -> AppResult<Option<User>> {
        Err(connection_lost())
    }
}
