//! Job Model and Database Operations
//!
//! A job ties a location and a department together under a server-generated
//! code. The gateway owns code assignment: every insert mints a fresh UUID
//! and stores it regardless of what the caller supplied, so two back-to-back
//! creates can never collide. Updates store the body's code unchanged.
//!
//! Both references carry `ON DELETE RESTRICT` in the schema; deleting a
//! referenced location or department fails at the store even if a caller
//! bypasses the handlers.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Job row; doubles as the create/update request body
///
/// JSON uses camelCase (`locationId`, `departmentId`). On create, `id` and
/// `code` may be omitted or carry anything - both are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique id, auto-assigned on insert
    #[serde(default)]
    pub id: i64,
    /// Server-generated unique code (UUID)
    #[serde(default)]
    pub code: String,
    /// Referenced location id
    #[serde(default)]
    pub location_id: i64,
    /// Referenced department id
    #[serde(default)]
    pub department_id: i64,
}

/// Insert a job with a freshly minted code and return the stored row
///
/// The code is generated here, not taken from the caller; the column's
/// unique index is a backstop, not the source of uniqueness.
pub async fn create_job(
    pool: &SqlitePool,
    location_id: i64,
    department_id: i64,
) -> Result<Job, sqlx::Error> {
    let code = Uuid::new_v4().to_string();

    sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (code, location_id, department_id)
        VALUES (?, ?, ?)
        RETURNING id, code, location_id, department_id
        "#,
    )
    .bind(&code)
    .bind(location_id)
    .bind(department_id)
    .fetch_one(pool)
    .await
}

/// Fetch all jobs ordered by id
pub async fn list_jobs(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        r#"
        SELECT id, code, location_id, department_id
        FROM jobs
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetch a job by id
pub async fn get_job(pool: &SqlitePool, id: i64) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        r#"
        SELECT id, code, location_id, department_id
        FROM jobs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace a job row by id, returning the affected-row count
///
/// The body's code is stored as-is; only inserts mint codes.
pub async fn update_job(pool: &SqlitePool, job: &Job) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE jobs
        SET code = ?, location_id = ?, department_id = ?
        WHERE id = ?
        "#,
    )
    .bind(&job.code)
    .bind(job.location_id)
    .bind(job.department_id)
    .bind(job.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Check whether a job row exists
pub async fn job_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM jobs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
