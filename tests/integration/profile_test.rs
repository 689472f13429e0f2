//! Integration tests for profile reads, redaction and owner-only updates.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::{Value, json};

use moviedb_auth::jwt::TokenKind;
use moviedb_database::repositories::UserStore;

const PROFILE: &str = "/user/a@x.com/profile";

fn full_update() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "dob": "2000-01-01",
        "address": "12 St James's Square, London"
    })
}

#[tokio::test]
async fn test_fresh_profile_has_nulls() {
    let app = helpers::TestApp::new();
    let token = app.bearer_for("a@x.com", "pw").await;

    let response = app.request("GET", PROFILE, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "a@x.com");
    assert!(response.body["firstName"].is_null());
    assert!(response.body["dob"].is_null());
    assert!(response.body.get("address").is_some());
}

#[tokio::test]
async fn test_owner_update_and_redaction() {
    let app = helpers::TestApp::new();
    let owner = app.bearer_for("a@x.com", "pw").await;
    let other = app.bearer_for("b@x.com", "pw").await;

    let response = app
        .request("PUT", PROFILE, Some(full_update()), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(response.body["firstName"], "Ada");
    assert_eq!(response.body["lastName"], "Lovelace");
    assert_eq!(response.body["dob"], "2000-01-01");
    assert_eq!(response.body["address"], "12 St James's Square, London");

    let anonymous = app.request("GET", PROFILE, None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["firstName"], "Ada");
    assert!(anonymous.body.get("dob").is_none());
    assert!(anonymous.body.get("address").is_none());

    let stranger = app.request("GET", PROFILE, None, Some(&other)).await;
    assert_eq!(stranger.status, StatusCode::OK);
    assert!(stranger.body.get("dob").is_none());
    assert!(stranger.body.get("address").is_none());

    let own = app.request("GET", PROFILE, None, Some(&owner)).await;
    assert_eq!(own.body["dob"], "2000-01-01");
    assert_eq!(own.body["address"], "12 St James's Square, London");
}

#[tokio::test]
async fn test_read_with_bad_token_is_anonymous() {
    let app = helpers::TestApp::new();
    let owner = app.bearer_for("a@x.com", "pw").await;
    app.request("PUT", PROFILE, Some(full_update()), Some(&owner))
        .await;

    let stale = app
        .tokens
        .issue_at("a@x.com", TokenKind::Bearer, Some(600), 1_000_000)
        .unwrap();

    for authorization in [
        "Bearer garbage".to_string(),
        format!("Bearer {}", stale.token),
        format!("bearer {owner}"),
        owner.clone(),
    ] {
        let response = app
            .request_raw("GET", PROFILE, None, Some(&authorization))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["firstName"], "Ada");
        assert!(response.body.get("dob").is_none());
    }
}

#[tokio::test]
async fn test_unknown_profile() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/user/nobody@x.com/profile", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], true);
    assert_eq!(response.message(), "User not found");
}

#[tokio::test]
async fn test_update_requires_bearer() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;

    let stale = app
        .tokens
        .issue_at("a@x.com", TokenKind::Bearer, Some(600), 1_000_000)
        .unwrap();
    let foreign = moviedb_auth::jwt::TokenService::with_secret("another-secret")
        .issue("a@x.com", TokenKind::Bearer, None)
        .unwrap();

    let cases = [
        (None, "Authorization header ('Bearer token') not found"),
        (
            Some("Token abc".to_string()),
            "Authorization header ('Bearer token') not found",
        ),
        (
            Some(format!("Bearer {}", stale.token)),
            "JWT token has expired",
        ),
        (
            Some(format!("Bearer {}", foreign.token)),
            "Invalid JWT token",
        ),
        (
            Some("Bearer not-a-jwt".to_string()),
            "Authorization header is malformed",
        ),
    ];

    for (authorization, message) in cases {
        let response = app
            .request_raw(
                "PUT",
                PROFILE,
                Some(full_update().to_string()),
                authorization.as_deref(),
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.message(), message);
    }

    let stored = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(stored.first_name.is_none());
}

#[tokio::test]
async fn test_update_by_other_user_is_forbidden() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;
    let other = app.bearer_for("b@x.com", "pw").await;

    let response = app
        .request("PUT", PROFILE, Some(full_update()), Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Forbidden");

    let response = app
        .request_raw("PUT", PROFILE, Some("not json".to_string()), Some(&format!("Bearer {other}")))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_body_validation() {
    let app = helpers::TestApp::new();
    let owner = app.bearer_for("a@x.com", "pw").await;
    let tomorrow = (Utc::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();

    let cases = [
        (
            json!({ "firstName": "Ada", "lastName": "Lovelace", "dob": "2000-01-01" }),
            "Request body incomplete: firstName, lastName, dob and address are required.",
        ),
        (
            json!({ "firstName": "", "lastName": "Lovelace", "dob": "2000-01-01", "address": "x" }),
            "Request body incomplete: firstName, lastName, dob and address are required.",
        ),
        (
            json!({ "firstName": 7, "lastName": "Lovelace", "dob": "2000-01-01", "address": "x" }),
            "Request body invalid: firstName, lastName and address must be strings only.",
        ),
        (
            json!({ "firstName": "Ada", "lastName": "Lovelace", "dob": "2024-02-30", "address": "x" }),
            "Invalid input: dob must be a real date in format YYYY-MM-DD.",
        ),
        (
            json!({ "firstName": "Ada", "lastName": "Lovelace", "dob": "01/01/2000", "address": "x" }),
            "Invalid input: dob must be a real date in format YYYY-MM-DD.",
        ),
        (
            json!({ "firstName": "Ada", "lastName": "Lovelace", "dob": tomorrow, "address": "x" }),
            "Invalid input: dob must be a date in the past.",
        ),
    ];

    for (body, message) in cases {
        let response = app.request("PUT", PROFILE, Some(body), Some(&owner)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message(), message);
    }

    let response = app
        .request_raw("PUT", PROFILE, Some("[]".to_string()), Some(&format!("Bearer {owner}")))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let stored = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(stored.dob.is_none());
}

#[tokio::test]
async fn test_update_for_missing_account() {
    let app = helpers::TestApp::new();
    let ghost = app
        .tokens
        .issue("ghost@x.com", TokenKind::Bearer, None)
        .unwrap();

    let response = app
        .request(
            "PUT",
            "/user/ghost@x.com/profile",
            Some(full_update()),
            Some(&ghost.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "User not found");
}

#[tokio::test]
async fn test_refresh_token_passes_the_gate() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "pw").await;
    let login = app.login("a@x.com", "pw").await;
    let refresh = login["refreshToken"]["token"].as_str().unwrap();

    let response = app
        .request("PUT", PROFILE, Some(full_update()), Some(refresh))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
