//! # moviedb-service
//!
//! Use cases behind the user endpoints. Services follow constructor
//! injection: the credential store, password hasher and token service are
//! handed in as `Arc`s at startup.

pub mod account;
pub mod profile;
pub mod validation;

#[cfg(test)]
mod testing;

pub use account::{AccountService, LoginRequest, RegisterRequest, TokenRequest};
pub use profile::{ProfileService, ProfileUpdateRequest, ProfileView, ProfileVisibility};
