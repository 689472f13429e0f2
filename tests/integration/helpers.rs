//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use moviedb_api::{AppState, build_router};
use moviedb_auth::jwt::TokenService;
use moviedb_auth::password::PasswordHasher;
use moviedb_core::config::AppConfig;
use moviedb_database::repositories::MemoryUserStore;

const TEST_CONFIG: &str = r#"
[auth]
jwt_secret = "integration-test-secret"

[database]
provider = "memory"

[logging]
level = "debug"
format = "pretty"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: MemoryUserStore,
    /// Token service sharing the router's secret
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    /// Create a new test application on an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let tokens = Arc::new(TokenService::new(&config.auth));

        let store = MemoryUserStore::new();
        let hasher = Arc::new(PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher"));
        let state = AppState::with_hasher(config, Arc::new(store.clone()), hasher);

        Self {
            router: build_router(state),
            store,
            tokens,
        }
    }

    /// Register an account through the API
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/user/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    }

    /// Log in through the API and return the response body
    pub async fn login(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/user/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body
    }

    /// Register, log in, and return the bearer token
    pub async fn bearer_for(&self, email: &str, password: &str) -> String {
        self.register(email, password).await;
        let body = self.login(email, password).await;
        body["bearerToken"]["token"]
            .as_str()
            .expect("bearer token missing")
            .to_string()
    }

    /// Make a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_raw(
            method,
            path,
            body.map(|b| b.to_string()),
            authorization.as_deref(),
        )
        .await
    }

    /// Make a request with a raw body string and raw `Authorization` value
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
