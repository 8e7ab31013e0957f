//! Router Configuration
//!
//! This module builds the complete Axum router: the liveness probe, the API
//! route table, request tracing, and the 404 fallback.
//!
//! # Route Order
//!
//! 1. `GET /health` - liveness probe
//! 2. API routes (resources, accounts, tokens)
//! 3. Trace layer wrapping everything registered above
//! 4. Fallback answering unknown paths with 404

use axum::{http::StatusCode, response::Json, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool + configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/health", axum::routing::get(health));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    router
        // Per-request tracing for every route above
        .layer(TraceLayer::new_for_http())
        // Fallback handler for unknown paths
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(app_state)
}
