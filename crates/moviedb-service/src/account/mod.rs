//! Registration, login, token refresh and logout.

pub mod requests;
pub mod service;

pub use requests::{LoginRequest, RegisterRequest, TokenRequest};
pub use service::AccountService;
