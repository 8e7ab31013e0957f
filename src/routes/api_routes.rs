//! API Route Table
//!
//! This module registers every API endpoint on the router.
//!
//! # Routes
//!
//! ## Departments
//! - `POST /api/v1/departments` - create
//! - `GET /api/v1/departments` - list
//! - `GET /api/v1/departments/{id}` - fetch one
//! - `PUT /api/v1/departments/{id}` - full replace
//!
//! ## Locations (no list route)
//! - `POST /api/v1/locations` - create
//! - `GET /api/v1/locations/{id}` - fetch one
//! - `PUT /api/v1/locations/{id}` - full replace
//!
//! ## Jobs
//! - `POST /api/v1/jobs` - create
//! - `GET /api/v1/jobs` - list
//! - `GET /api/v1/jobs/{id}` - fetch one
//! - `PUT /api/v1/jobs/{id}` - full replace
//!
//! ## Accounts
//! - `POST /api/UserInfo` - registration (public)
//! - `GET /api/UserInfo` - list (Admin)
//! - `GET /api/UserInfo/{id}` - fetch one (Admin)
//! - `PUT /api/UserInfo/{id}` - full replace (Admin)
//! - `DELETE /api/UserInfo/{id}` - delete (Admin)
//!
//! ## Tokens
//! - `POST /api/Token` - exchange credentials for a bearer token (public)

use axum::middleware;
use axum::Router;

use crate::auth::handlers::issue_token;
use crate::departments::handlers::{
    create_department, get_department, list_departments, update_department,
};
use crate::jobs::handlers::{create_job, get_job, list_jobs, update_job};
use crate::locations::handlers::{create_location, get_location, update_location};
use crate::middleware::require_admin;
use crate::server::state::AppState;
use crate::users::handlers::{
    delete_user_info, get_user_info, list_user_info, register_user_info, update_user_info,
};

/// Configure API routes
///
/// The Admin-gated account routes are built as their own subtree so the role
/// middleware wraps exactly those handlers; registration and token issuance
/// stay public. Registration shares the `/api/UserInfo` path with the gated
/// list route and is registered after the merge so the gate never touches it.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed to construct the role middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/api/UserInfo", axum::routing::get(list_user_info))
        .route(
            "/api/UserInfo/{id}",
            axum::routing::get(get_user_info)
                .put(update_user_info)
                .delete(delete_user_info),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    router
        // Department endpoints
        .route(
            "/api/v1/departments",
            axum::routing::post(create_department).get(list_departments),
        )
        .route(
            "/api/v1/departments/{id}",
            axum::routing::get(get_department).put(update_department),
        )
        // Location endpoints
        .route("/api/v1/locations", axum::routing::post(create_location))
        .route(
            "/api/v1/locations/{id}",
            axum::routing::get(get_location).put(update_location),
        )
        // Job endpoints
        .route(
            "/api/v1/jobs",
            axum::routing::post(create_job).get(list_jobs),
        )
        .route(
            "/api/v1/jobs/{id}",
            axum::routing::get(get_job).put(update_job),
        )
        // Account endpoints (gated subtree + public registration)
        .merge(admin_routes)
        .route("/api/UserInfo", axum::routing::post(register_user_info))
        // Token endpoint
        .route("/api/Token", axum::routing::post(issue_token))
}
