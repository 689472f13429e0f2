//! Route definitions for the MovieFanatics HTTP API.
//!
//! Account and profile routes are mounted under `/user`; the health check
//! sits at the root.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/user", user_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Account and profile endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::account::register))
        .route("/login", post(handlers::account::login))
        .route("/refresh", post(handlers::account::refresh))
        .route("/logout", post(handlers::account::logout))
        .route(
            "/{email}/profile",
            get(handlers::profile::get_profile).put(handlers::profile::update_profile),
        )
}
