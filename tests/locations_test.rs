//! Location API integration tests
//!
//! Create, fetch, and update over `/api/v1/locations`. Locations have no
//! list route, so the collection path only accepts POST.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn test_location_lifecycle() {
    let (server, _state) = spawn_app().await;

    // Create a fully-addressed location
    let response = server
        .post("/api/v1/locations")
        .json(&json!({
            "title": "HQ",
            "city": "Springfield",
            "state": "IL",
            "country": "USA",
            "zip": "62701"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "HQ");
    assert_eq!(created["city"], "Springfield");

    // Fetch it back
    let fetched: Value = server.get(&format!("/api/v1/locations/{id}")).await.json();
    assert_eq!(fetched["zip"], "62701");
    assert_eq!(fetched["country"], "USA");

    // Move it
    let response = server
        .put(&format!("/api/v1/locations/{id}"))
        .json(&json!({
            "id": id,
            "title": "HQ",
            "city": "Chicago",
            "state": "IL",
            "country": "USA",
            "zip": "60601"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let fetched: Value = server.get(&format!("/api/v1/locations/{id}")).await.json();
    assert_eq!(fetched["city"], "Chicago");
    assert_eq!(fetched["zip"], "60601");
}

#[tokio::test]
async fn test_address_fields_are_optional() {
    let (server, _state) = spawn_app().await;

    let response = server
        .post("/api/v1/locations")
        .json(&json!({ "title": "Remote" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["title"], "Remote");
    assert_eq!(body["city"], Value::Null);
    assert_eq!(body["zip"], Value::Null);
}

#[tokio::test]
async fn test_create_location_without_title_is_rejected() {
    let (server, _state) = spawn_app().await;

    let response = server
        .post("/api/v1/locations")
        .json(&json!({ "city": "Springfield" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "title");
}

#[tokio::test]
async fn test_locations_have_no_list_route() {
    let (server, _state) = spawn_app().await;

    let response = server.get("/api/v1/locations").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_get_unknown_location_is_404() {
    let (server, _state) = spawn_app().await;

    let response = server.get("/api/v1/locations/42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_rejected() {
    let (server, _state) = spawn_app().await;

    let created: Value = server
        .post("/api/v1/locations")
        .json(&json!({ "title": "HQ" }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/v1/locations/{id}"))
        .json(&json!({ "id": id + 7, "title": "Elsewhere" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Id in path does not match id in body");
}
