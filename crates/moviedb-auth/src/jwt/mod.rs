//! Signed bearer and refresh tokens.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::{Claims, TokenKind};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use error::TokenError;
pub use service::{IssuedToken, TokenPair, TokenService};
