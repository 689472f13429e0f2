//! Custom Axum extractors.

pub mod identity;
pub mod json;

pub use identity::{BearerIdentity, OptionalIdentity};
pub use json::{JsonBody, RequestBody};
