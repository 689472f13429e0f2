//! # moviedb-database
//!
//! Credential store for user accounts. Defines the [`UserStore`] contract
//! and ships two implementations: a PostgreSQL repository backed by sqlx
//! and an in-memory store for tests and local runs.

pub mod repositories;

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use moviedb_core::config::DatabaseConfig;
use moviedb_core::error::{AppError, ErrorKind};
use moviedb_core::result::AppResult;

pub use repositories::{MemoryUserStore, UserRepository, UserStore};

/// Builds the credential store selected by `database.provider`.
///
/// For postgres the `users` schema is migrated before the store is handed
/// out, so a returned store is always ready for queries.
pub async fn open_user_store(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
    match config.provider.as_str() {
        "postgres" => {
            let pool = connect_postgres(config).await?;
            Ok(Arc::new(UserRepository::new(pool)))
        }
        "memory" => {
            warn!("Using in-memory credential store; accounts are lost on restart");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database provider: '{other}'. Supported: postgres, memory"
        ))),
    }
}

/// Opens the pool and applies pending schema migrations.
async fn connect_postgres(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %redact_credentials(&config.url),
        pool_size = config.max_connections,
        "Opening postgres credential store"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Credential store unreachable", e))?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Users schema migration failed", e)
        })?;

    info!("Credential store ready");
    Ok(pool)
}

/// Replaces the userinfo part of a connection URL (`user:pass@`) with `***@`.
fn redact_credentials(url: &str) -> String {
    let (scheme, rest) = url.split_once("://").unwrap_or(("", url));
    match rest.rsplit_once('@') {
        Some((_, host)) if scheme.is_empty() => format!("***@{host}"),
        Some((_, host)) => format!("{scheme}://***@{host}"),
        None => url.to_string(),
    }
}
