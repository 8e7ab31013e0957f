//! Token endpoint integration tests
//!
//! `POST /api/Token` exchanges credentials for a signed bearer token. The
//! response body is the raw token string, so the claims are checked by
//! decoding it with the same configuration the server signs with.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{seed_admin, spawn_app, test_config, ADMIN_EMAIL, ADMIN_PASSWORD};
use orgcore::auth::verify_token;

#[tokio::test]
async fn test_issued_token_carries_account_claims() {
    let (server, state) = spawn_app().await;
    let admin_id = seed_admin(&state).await;

    let response = server
        .post("/api/Token")
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.text();

    let claims = verify_token(&test_config().jwt, &token).unwrap();
    assert_eq!(claims.id, admin_id);
    assert_eq!(claims.email, ADMIN_EMAIL);
    assert_eq!(claims.role.as_deref(), Some("Admin"));
    assert_eq!(claims.sub, "orgcore-test-auth");
    assert_eq!(claims.iss, "orgcore-test");
    assert_eq!(claims.aud, "orgcore-test-clients");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let (server, state) = spawn_app().await;
    seed_admin(&state).await;

    let response = server
        .post("/api/Token")
        .json(&json!({ "email": ADMIN_EMAIL, "password": "not-the-password" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Wrong password.");
}

#[tokio::test]
async fn test_unknown_email_is_rejected() {
    let (server, _state) = spawn_app().await;

    let response = server
        .post("/api/Token")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid credentials");
}

#[tokio::test]
async fn test_missing_credentials_are_rejected() {
    let (server, _state) = spawn_app().await;

    let response = server
        .post("/api/Token")
        .json(&json!({ "email": ADMIN_EMAIL }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing credentials");
}

#[tokio::test]
async fn test_null_credentials_are_rejected() {
    let (server, _state) = spawn_app().await;

    let response = server
        .post("/api/Token")
        .json(&json!({ "email": null, "password": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing credentials");
}
