//! Shared fixtures for the integration suite
//!
//! Every test boots the full application against a fresh in-memory SQLite
//! database: real router, real middleware, real migrations. The pool is
//! capped at a single connection so the in-memory database survives between
//! queries.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use bcrypt::{hash, DEFAULT_COST};

use orgcore::routes::create_router;
use orgcore::server::config::{AppConfig, JwtConfig};
use orgcore::server::init::build_state;
use orgcore::server::state::AppState;

/// Email of the seeded administrator account
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Password of the seeded administrator account
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Configuration for an isolated in-memory instance
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        // One connection keeps the in-memory database alive for the whole test
        database_max_connections: 1,
        server_port: 0,
        jwt: JwtConfig {
            secret: "test-secret-key-for-integration-tests".to_string(),
            issuer: "orgcore-test".to_string(),
            audience: "orgcore-test-clients".to_string(),
            subject: "orgcore-test-auth".to_string(),
            ttl_secs: 3600,
        },
    }
}

/// Boot the application against a fresh in-memory database
///
/// Returns the test server plus the state so tests can also inspect the
/// store directly.
pub async fn spawn_app() -> (TestServer, AppState) {
    let state = build_state(test_config())
        .await
        .expect("Failed to build test application state");
    let server =
        TestServer::new(create_router(state.clone())).expect("Failed to start test server");
    (server, state)
}

/// Insert an administrator account directly into the store
///
/// Registration never assigns roles, so tests write the Admin row themselves.
/// Returns the new account id.
pub async fn seed_admin(state: &AppState) -> i64 {
    let password_hash = hash(ADMIN_PASSWORD, DEFAULT_COST).expect("Failed to hash password");
    sqlx::query_scalar(
        "INSERT INTO users (email, password, role) VALUES (?, ?, 'Admin') RETURNING user_id",
    )
    .bind(ADMIN_EMAIL)
    .bind(password_hash)
    .fetch_one(&state.db)
    .await
    .expect("Failed to seed admin account")
}

/// Seed an administrator and log in as them, returning the bearer token
pub async fn admin_token(server: &TestServer, state: &AppState) -> String {
    seed_admin(state).await;

    let response = server
        .post("/api/Token")
        .json(&serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.text()
}
