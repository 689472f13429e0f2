//! # moviedb-api
//!
//! HTTP API layer for the MovieFanatics server built on Axum.
//!
//! Provides the `/user` endpoints, a health check, identity extractors,
//! request-body extraction with fixed 400 messages, request logging, CORS,
//! and the mapping from `AppError` to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
