//! Job Handlers
//!
//! HTTP handlers for the job resource:
//!
//! - `POST /api/v1/jobs` - create (code assigned server-side)
//! - `GET /api/v1/jobs` - list
//! - `GET /api/v1/jobs/{id}` - fetch one
//! - `PUT /api/v1/jobs/{id}` - full replace
//!
//! # Reference Validation
//!
//! Create and update check that the referenced location and department rows
//! exist before writing and answer 400 with field-level detail when they do
//! not. The schema's foreign keys remain the backstop for the window between
//! check and write; a constraint failure there surfaces as a fatal storage
//! error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::departments;
use crate::error::{ApiError, FieldError};
use crate::jobs::db;
use crate::jobs::db::Job;
use crate::locations;

/// Check that the job's location and department references exist
async fn validate_references(pool: &SqlitePool, job: &Job) -> Result<(), ApiError> {
    let mut errors = Vec::new();

    if !locations::db::location_exists(pool, job.location_id).await? {
        errors.push(FieldError::new(
            "locationId",
            format!("Location {} does not exist", job.location_id),
        ));
    }
    if !departments::db::department_exists(pool, job.department_id).await? {
        errors.push(FieldError::new(
            "departmentId",
            format!("Department {} does not exist", job.department_id),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

/// Create a job
///
/// Any client-supplied code is discarded; the stored row carries a freshly
/// generated one.
///
/// # Errors
///
/// * `400 Bad Request` - Referenced location or department does not exist
/// * `500 Internal Server Error` - Storage failure
pub async fn create_job(
    State(pool): State<SqlitePool>,
    Json(job): Json<Job>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    validate_references(&pool, &job).await?;

    let created = db::create_job(&pool, job.location_id, job.department_id).await?;
    tracing::info!("Created job {} with code {}", created.id, created.code);

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all jobs
pub async fn list_jobs(State(pool): State<SqlitePool>) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = db::list_jobs(&pool).await?;
    Ok(Json(jobs))
}

/// Fetch a job by id
pub async fn get_job(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Job>, ApiError> {
    let job = db::get_job(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(job))
}

/// Replace a job by id
///
/// # Errors
///
/// * `400 Bad Request` - Path id differs from body id, or a reference is dangling
/// * `404 Not Found` - No job with this id
/// * `500 Internal Server Error` - The row changed concurrently, or storage failed
pub async fn update_job(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(job): Json<Job>,
) -> Result<StatusCode, ApiError> {
    if id != job.id {
        tracing::warn!(
            "Job update rejected: path id {} does not match body id {}",
            id,
            job.id
        );
        return Err(ApiError::bad_request("Id in path does not match id in body"));
    }

    validate_references(&pool, &job).await?;

    let rows = db::update_job(&pool, &job).await?;
    if rows == 0 {
        return Err(if db::job_exists(&pool, id).await? {
            ApiError::write_conflict(format!("job {id} changed concurrently"))
        } else {
            ApiError::NotFound
        });
    }

    tracing::info!("Updated job {}", id);
    Ok(StatusCode::NO_CONTENT)
}
