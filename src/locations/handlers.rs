//! Location Handlers
//!
//! HTTP handlers for the location resource:
//!
//! - `POST /api/v1/locations` - create
//! - `GET /api/v1/locations/{id}` - fetch one
//! - `PUT /api/v1/locations/{id}` - full replace
//!
//! Locations intentionally have no list route. Create, get, and update
//! follow the same contract as departments, including the optimistic
//! update re-check.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::locations::db;
use crate::locations::db::Location;

/// Create a location
///
/// # Errors
///
/// * `400 Bad Request` - Missing title (field-level detail, nothing persisted)
pub async fn create_location(
    State(pool): State<SqlitePool>,
    Json(location): Json<Location>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let errors = location.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let created = db::create_location(&pool, &location).await?;
    tracing::info!("Created location {} ({})", created.id, created.title);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a location by id
pub async fn get_location(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Location>, ApiError> {
    let location = db::get_location(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(location))
}

/// Replace a location by id
///
/// # Errors
///
/// * `400 Bad Request` - Path id differs from body id, or the title is missing
/// * `404 Not Found` - No location with this id
/// * `500 Internal Server Error` - The row changed concurrently, or storage failed
pub async fn update_location(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(location): Json<Location>,
) -> Result<StatusCode, ApiError> {
    if id != location.id {
        tracing::warn!(
            "Location update rejected: path id {} does not match body id {}",
            id,
            location.id
        );
        return Err(ApiError::bad_request("Id in path does not match id in body"));
    }

    let errors = location.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let rows = db::update_location(&pool, &location).await?;
    if rows == 0 {
        return Err(if db::location_exists(&pool, id).await? {
            ApiError::write_conflict(format!("location {id} changed concurrently"))
        } else {
            ApiError::NotFound
        });
    }

    tracing::info!("Updated location {}", id);
    Ok(StatusCode::NO_CONTENT)
}
