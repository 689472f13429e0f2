//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required; there is no default.
    pub jwt_secret: String,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub password_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_iterations")]
    pub password_iterations: u32,
    /// Argon2 lane count.
    #[serde(default = "default_parallelism")]
    pub password_parallelism: u32,
}

impl AuthConfig {
    /// Builds a config with the given secret and default hashing cost.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            password_memory_kib: default_memory_kib(),
            password_iterations: default_iterations(),
            password_parallelism: default_parallelism(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
