//! Location model and database operations.
//!
//! A location is a titled address: only the title is required, the address
//! fields are optional. Locations are referenced by jobs with a restrict
//! rule, same as departments.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::FieldError;

/// Location row; doubles as the create/update request body
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    /// Unique id, auto-assigned on insert
    #[serde(default)]
    pub id: i64,
    /// Location title (required)
    #[serde(default)]
    pub title: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

impl Location {
    /// Check required fields, returning one entry per offending field
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        errors
    }
}

/// Insert a location and return the stored row
pub async fn create_location(pool: &SqlitePool, location: &Location) -> Result<Location, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        INSERT INTO locations (title, city, state, country, zip)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, city, state, country, zip
        "#,
    )
    .bind(&location.title)
    .bind(&location.city)
    .bind(&location.state)
    .bind(&location.country)
    .bind(&location.zip)
    .fetch_one(pool)
    .await
}

/// Fetch a location by id
pub async fn get_location(pool: &SqlitePool, id: i64) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        SELECT id, title, city, state, country, zip
        FROM locations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace a location row by id, returning the affected-row count
pub async fn update_location(pool: &SqlitePool, location: &Location) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE locations
        SET title = ?, city = ?, state = ?, country = ?, zip = ?
        WHERE id = ?
        "#,
    )
    .bind(&location.title)
    .bind(&location.city)
    .bind(&location.state)
    .bind(&location.country)
    .bind(&location.zip)
    .bind(location.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Check whether a location row exists
pub async fn location_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM locations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Delete a location by id
///
/// No HTTP route exposes this; the store rejects it while any job references
/// the location.
pub async fn delete_location(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM locations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
