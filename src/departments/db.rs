//! Department Model and Database Operations
//!
//! The department row is the smallest entity in the schema: an id and a
//! required title. Departments are referenced by jobs, and the schema marks
//! that reference `ON DELETE RESTRICT`, so [`delete_department`] fails with a
//! constraint error while any job points at the row.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::FieldError;

/// Department row
///
/// The same struct serves as the JSON body for create/update requests;
/// `id` defaults to zero when the client omits it and is assigned by the
/// store on insert.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    /// Unique id, auto-assigned on insert
    #[serde(default)]
    pub id: i64,
    /// Department title (required)
    #[serde(default)]
    pub title: String,
}

impl Department {
    /// Check required fields, returning one entry per offending field
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        errors
    }
}

/// Insert a department and return the stored row
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `title` - Department title
pub async fn create_department(pool: &SqlitePool, title: &str) -> Result<Department, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        r#"
        INSERT INTO departments (title)
        VALUES (?)
        RETURNING id, title
        "#,
    )
    .bind(title)
    .fetch_one(pool)
    .await
}

/// Fetch all departments ordered by id
pub async fn list_departments(pool: &SqlitePool) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        r#"
        SELECT id, title
        FROM departments
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetch a department by id
///
/// # Returns
/// Department or None if not found
pub async fn get_department(pool: &SqlitePool, id: i64) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        r#"
        SELECT id, title
        FROM departments
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace a department row by id
///
/// # Returns
/// Number of rows affected; zero means the row vanished or changed since the
/// caller last saw it, and the caller decides between 404 and a conflict.
pub async fn update_department(
    pool: &SqlitePool,
    department: &Department,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE departments
        SET title = ?
        WHERE id = ?
        "#,
    )
    .bind(&department.title)
    .bind(department.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Check whether a department row exists
pub async fn department_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM departments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Delete a department by id
///
/// There is no HTTP route for this; it exists for administrative tooling and
/// exercises the restrict rule: the store rejects the delete while any job
/// references the department.
pub async fn delete_department(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM departments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_title() {
        let department = Department {
            id: 0,
            title: "Engineering".to_string(),
        };
        assert!(department.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_missing_title() {
        let department = Department {
            id: 0,
            title: String::new(),
        };
        let errors = department.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_validate_rejects_whitespace_title() {
        let department = Department {
            id: 0,
            title: "   ".to_string(),
        };
        assert_eq!(department.validate().len(), 1);
    }

    #[test]
    fn test_body_without_id_defaults_to_zero() {
        let department: Department = serde_json::from_str(r#"{"title":"HQ"}"#).unwrap();
        assert_eq!(department.id, 0);
        assert_eq!(department.title, "HQ");
    }
}
