//! Integration tests for registration, login, refresh and logout.

mod helpers;

use http::StatusCode;
use serde_json::json;

use moviedb_auth::jwt::TokenKind;
use moviedb_database::repositories::UserStore;

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(json!({ "email": "a@x.com", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "User created");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_duplicate_registration_keeps_hash() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "first").await;
    let original = app.store.find_by_email("a@x.com").await.unwrap().unwrap();

    let response = app
        .request(
            "POST",
            "/user/register",
            Some(json!({ "email": "a@x.com", "password": "second" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], true);
    assert_eq!(response.message(), "User already exists");

    let after = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(after.password_hash, original.password_hash);
    app.login("a@x.com", "first").await;
}

#[tokio::test]
async fn test_register_incomplete_body() {
    let app = helpers::TestApp::new();

    for body in [
        Some(r#"{"email":"a@x.com"}"#.to_string()),
        Some(r#"{"email":"","password":"pw"}"#.to_string()),
        Some(r#"{"email":"a@x.com","password":42}"#.to_string()),
        Some("not json".to_string()),
        None,
    ] {
        let response = app.request_raw("POST", "/user/register", body, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.message(),
            "Request body incomplete - both email and password are required"
        );
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_login_returns_token_pair() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;

    let body = app.login("a@x.com", "pw").await;

    assert_eq!(body["bearerToken"]["token_type"], "Bearer");
    assert_eq!(body["bearerToken"]["expires_in"], 600);
    assert_eq!(body["refreshToken"]["token_type"], "Refresh");
    assert_eq!(body["refreshToken"]["expires_in"], 86400);

    let bearer = body["bearerToken"]["token"].as_str().unwrap();
    let claims = app.tokens.verify(bearer).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.kind, TokenKind::Bearer);
}

#[tokio::test]
async fn test_login_custom_expiry() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;

    let response = app
        .request(
            "POST",
            "/user/login",
            Some(json!({
                "email": "a@x.com",
                "password": "pw",
                "longExpiry": true,
                "bearerExpiresInSeconds": 30,
                "refreshExpiresInSeconds": -1
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["bearerToken"]["expires_in"], 30);
    assert_eq!(response.body["refreshToken"]["expires_in"], 86400);
}

#[tokio::test]
async fn test_login_unusable_expiry_falls_back_to_defaults() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;

    for ttl in [json!(30.5), json!("60"), json!(1e20)] {
        let response = app
            .request(
                "POST",
                "/user/login",
                Some(json!({
                    "email": "a@x.com",
                    "password": "pw",
                    "bearerExpiresInSeconds": ttl.clone(),
                    "refreshExpiresInSeconds": ttl,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        assert_eq!(response.body["bearerToken"]["expires_in"], 600);
        assert_eq!(response.body["refreshToken"]["expires_in"], 86400);
    }
}

#[tokio::test]
async fn test_login_failures_share_message() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;

    for (email, password) in [("a@x.com", "wrong"), ("nobody@x.com", "pw"), ("A@X.COM", "pw")] {
        let response = app
            .request(
                "POST",
                "/user/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.message(), "Incorrect email or password");
    }
}

#[tokio::test]
async fn test_login_incomplete_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/user/login", Some(json!({ "email": "a@x.com" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Request body incomplete - email and password needed"
    );
}

#[tokio::test]
async fn test_refresh_echoes_refresh_token() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;
    let login = app.login("a@x.com", "pw").await;
    let refresh_token = login["refreshToken"]["token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/user/refresh",
            Some(json!({ "refreshToken": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["refreshToken"]["token"], refresh_token);
    assert_eq!(response.body["refreshToken"]["expires_in"], 86400);
    assert_eq!(response.body["bearerToken"]["expires_in"], 600);

    let bearer = response.body["bearerToken"]["token"].as_str().unwrap();
    assert_eq!(app.tokens.verify(bearer).unwrap().email, "a@x.com");
}

#[tokio::test]
async fn test_refresh_errors() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/user/refresh", Some(json!({})), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Request body incomplete, refresh token required"
    );

    let response = app
        .request(
            "POST",
            "/user/refresh",
            Some(json!({ "refreshToken": "garbage" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid JWT token");

    let stale = app
        .tokens
        .issue_at("a@x.com", TokenKind::Refresh, Some(10), 1_000_000)
        .unwrap();
    let response = app
        .request(
            "POST",
            "/user/refresh",
            Some(json!({ "refreshToken": stale.token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "JWT token has expired");
}

#[tokio::test]
async fn test_logout_does_not_revoke() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;
    let login = app.login("a@x.com", "pw").await;
    let refresh_token = login["refreshToken"]["token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/user/logout",
            Some(json!({ "refreshToken": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["error"], false);
    assert_eq!(response.message(), "Token successfully invalidated");

    let response = app
        .request(
            "POST",
            "/user/refresh",
            Some(json!({ "refreshToken": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_rejects_bad_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/logout",
            Some(json!({ "refreshToken": "garbage" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid JWT token");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
