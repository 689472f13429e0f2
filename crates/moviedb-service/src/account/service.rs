//! Account lifecycle: register, login, refresh, logout.

use std::sync::Arc;

use tracing::{info, warn};

use moviedb_auth::jwt::{TokenPair, TokenService};
use moviedb_auth::password::PasswordHasher;
use moviedb_core::error::AppError;
use moviedb_database::repositories::UserStore;
use moviedb_entity::user::NewUser;

use super::requests::{
    LOGIN_INCOMPLETE, LoginRequest, REGISTER_INCOMPLETE, RegisterRequest, TOKEN_INCOMPLETE,
    TokenRequest,
};
use crate::validation::validate_body;

/// Shown for both an unknown email and a wrong password.
pub const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Handles credential checks and token issuance.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Registers a new account.
    ///
    /// An existing email is a conflict and leaves the stored record as it was.
    pub async fn register(&self, req: RegisterRequest) -> Result<(), AppError> {
        validate_body(&req, REGISTER_INCOMPLETE)?;
        let (Some(email), Some(password)) = (req.email, req.password) else {
            return Err(AppError::validation(REGISTER_INCOMPLETE));
        };

        let result = async {
            if self.store.find_by_email(&email).await?.is_some() {
                return Err(AppError::conflict("User already exists"));
            }

            let password_hash = self.hash_off_thread(password).await?;
            self.store
                .create(NewUser {
                    email: email.clone(),
                    password_hash,
                })
                .await
        }
        .await
        .map_err(|e| e.or_internal("Failed to register user"))?;

        info!(email = %result.email, "User registered");
        Ok(())
    }

    /// Checks credentials and issues a bearer/refresh token pair.
    pub async fn login(&self, req: LoginRequest) -> Result<TokenPair, AppError> {
        validate_body(&req, LOGIN_INCOMPLETE)?;
        let (bearer_ttl, refresh_ttl) = (req.bearer_ttl(), req.refresh_ttl());
        let (Some(email), Some(password)) = (req.email, req.password) else {
            return Err(AppError::validation(LOGIN_INCOMPLETE));
        };

        let user = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|e| e.or_internal("Internal server error"))?;

        let Some(user) = user else {
            warn!(email = %email, "Login failed: unknown account");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        };

        if !self.verify_off_thread(password, user.password_hash).await? {
            warn!(email = %email, "Login failed: password mismatch");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        let pair = self.tokens.issue_pair(&email, bearer_ttl, refresh_ttl)?;

        info!(
            email = %email,
            bearer_ttl = pair.bearer.expires_in,
            refresh_ttl = pair.refresh.expires_in,
            "User logged in"
        );
        Ok(pair)
    }

    /// Exchanges a refresh token for a new bearer token.
    ///
    /// The refresh token itself is returned unchanged.
    pub async fn refresh(&self, req: TokenRequest) -> Result<TokenPair, AppError> {
        validate_body(&req, TOKEN_INCOMPLETE)?;
        let token = req.refresh_token.unwrap_or_default();

        Ok(self.tokens.refresh(&token)?)
    }

    /// Acknowledges a logout.
    ///
    /// Tokens are stateless, so the refresh token stays usable until it
    /// expires; this only confirms that it verifies.
    pub async fn logout(&self, req: TokenRequest) -> Result<(), AppError> {
        validate_body(&req, TOKEN_INCOMPLETE)?;
        let token = req.refresh_token.unwrap_or_default();

        let claims = self.tokens.invalidate(&token)?;
        info!(email = %claims.email, "User logged out");
        Ok(())
    }

    async fn hash_off_thread(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify_off_thread(&self, password: String, hash: String) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))
    }
}
