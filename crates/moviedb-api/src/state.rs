//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use moviedb_auth::gate::AuthorizationGate;
use moviedb_auth::jwt::TokenService;
use moviedb_auth::password::PasswordHasher;
use moviedb_core::config::AppConfig;
use moviedb_core::error::AppError;
use moviedb_database::repositories::UserStore;
use moviedb_service::{AccountService, ProfileService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks. The
/// credential store and token service are reached only through the gate
/// and the services.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer header checks
    pub gate: Arc<AuthorizationGate>,
    /// Register, login, refresh, logout
    pub accounts: Arc<AccountService>,
    /// Profile reads and updates
    pub profiles: Arc<ProfileService>,
}

impl AppState {
    /// Wires the services from configuration and an opened store.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        Ok(Self::with_hasher(config, store, hasher))
    }

    /// Like [`AppState::new`] with an explicitly built password hasher.
    pub fn with_hasher(
        config: AppConfig,
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let gate = Arc::new(AuthorizationGate::new(Arc::clone(&tokens)));
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store),
            hasher,
            Arc::clone(&tokens),
        ));
        let profiles = Arc::new(ProfileService::new(store));

        Self {
            config: Arc::new(config),
            gate,
            accounts,
            profiles,
        }
    }
}
