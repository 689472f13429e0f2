//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use moviedb_core::error::{AppError, ErrorKind};
use moviedb_core::result::AppResult;
use moviedb_entity::user::{NewUser, ProfileChanges, User};

use super::UserStore;

/// Repository for user account persistence in PostgreSQL.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, password_hash, created_at, updated_at)
               VALUES ($1, $2, NOW(), NOW())
               ON CONFLICT (email) DO NOTHING
               RETURNING *"#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))?;

        match created {
            Some(user) => {
                debug!(email = %user.email, "User row inserted");
                Ok(user)
            }
            None => Err(AppError::conflict("User already exists")),
        }
    }

    async fn update_profile(
        &self,
        email: &str,
        changes: ProfileChanges,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET first_name = $2, last_name = $3, dob = $4, address = $5, updated_at = NOW()
               WHERE email = $1
               RETURNING *"#,
        )
        .bind(email)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.dob)
        .bind(&changes.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }
}
