//! Credential store contract and its implementations.

pub mod memory;
pub mod user;

use async_trait::async_trait;

use moviedb_core::result::AppResult;
use moviedb_entity::user::{NewUser, ProfileChanges, User};

pub use memory::MemoryUserStore;
pub use user::UserRepository;

/// Persistence contract for user accounts.
///
/// Implementations store whatever hash they are given; they never hash or
/// verify passwords themselves. Emails are compared case-sensitively.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by its exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new account.
    ///
    /// Fails with a `Conflict` error when the email is already taken; the
    /// existing record is left untouched.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Overwrite the profile fields of an account and return the updated
    /// record, or `None` when no account has that email.
    async fn update_profile(&self, email: &str, changes: ProfileChanges)
    -> AppResult<Option<User>>;
}
