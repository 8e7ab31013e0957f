//! Department Handlers
//!
//! HTTP handlers for the department resource:
//!
//! - `POST /api/v1/departments` - create
//! - `GET /api/v1/departments` - list
//! - `GET /api/v1/departments/{id}` - fetch one
//! - `PUT /api/v1/departments/{id}` - full replace
//!
//! # Update Semantics
//!
//! Updates are full-record replaces guarded by the path id: a body whose id
//! differs from the path is rejected with 400 before anything is written.
//! The write itself is optimistic - if it affects zero rows the handler
//! re-checks existence and answers 404 when the row is gone, otherwise the
//! conflict surfaces as a fatal error with no retry.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::departments::db;
use crate::departments::db::Department;
use crate::error::ApiError;

/// Create a department
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(department)` - Department body; a missing id defaults to zero and
///   is replaced by the assigned one
///
/// # Returns
///
/// `201 Created` with the stored row, including the assigned id
///
/// # Errors
///
/// * `400 Bad Request` - Missing title (field-level detail, nothing persisted)
/// * `500 Internal Server Error` - Storage failure
pub async fn create_department(
    State(pool): State<SqlitePool>,
    Json(department): Json<Department>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    let errors = department.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let created = db::create_department(&pool, &department.title).await?;
    tracing::info!("Created department {} ({})", created.id, created.title);

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all departments
pub async fn list_departments(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let departments = db::list_departments(&pool).await?;
    Ok(Json(departments))
}

/// Fetch a department by id
///
/// # Errors
///
/// * `404 Not Found` - No department with this id
pub async fn get_department(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Department>, ApiError> {
    let department = db::get_department(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(department))
}

/// Replace a department by id
///
/// # Errors
///
/// * `400 Bad Request` - Path id differs from body id, or the title is missing
/// * `404 Not Found` - No department with this id
/// * `500 Internal Server Error` - The row changed concurrently, or storage failed
pub async fn update_department(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(department): Json<Department>,
) -> Result<StatusCode, ApiError> {
    if id != department.id {
        tracing::warn!(
            "Department update rejected: path id {} does not match body id {}",
            id,
            department.id
        );
        return Err(ApiError::bad_request("Id in path does not match id in body"));
    }

    let errors = department.validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let rows = db::update_department(&pool, &department).await?;
    if rows == 0 {
        return Err(if db::department_exists(&pool, id).await? {
            ApiError::write_conflict(format!("department {id} changed concurrently"))
        } else {
            ApiError::NotFound
        });
    }

    tracing::info!("Updated department {}", id);
    Ok(StatusCode::NO_CONTENT)
}
