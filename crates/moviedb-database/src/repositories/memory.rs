//! In-memory user store for tests and single-process local runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviedb_core::error::AppError;
use moviedb_core::result::AppResult;
use moviedb_entity::user::{NewUser, ProfileChanges, User};

use super::UserStore;

/// User store keeping accounts in a process-local map.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store holds no accounts.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(AppError::conflict("User already exists"));
        }

        let user = User::from_new(new_user);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn update_profile(
        &self,
        email: &str,
        changes: ProfileChanges,
    ) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(email).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }
}
