//! # moviedb-auth
//!
//! Authentication building blocks for the MovieFanatics server.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: signed bearer/refresh tokens: issue, verify, refresh, invalidate
//! - `gate`: `Authorization: Bearer` header checking and verified identity

pub mod gate;
pub mod jwt;
pub mod password;

pub use gate::{AuthorizationGate, GateError, VerifiedIdentity};
pub use jwt::{Claims, IssuedToken, TokenError, TokenKind, TokenPair, TokenService};
pub use password::PasswordHasher;
