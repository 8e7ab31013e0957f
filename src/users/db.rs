//! Account Model and Database Operations
//!
//! This module handles the account row (`UserInfo`) and its queries. The
//! password column always holds a bcrypt hash, never plaintext, and the
//! struct skips it on serialization so no response body can leak it.
//!
//! Email uniqueness is enforced at write time by lookup-before-insert in the
//! registration handler; the column's unique index backstops the race
//! between lookup and insert.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Account row
///
/// JSON uses camelCase (`userId`). The password field deserializes from
/// request bodies but never serializes into responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Unique id, auto-assigned on insert
    #[serde(default)]
    pub user_id: i64,
    /// Account email, unique across accounts
    #[serde(default)]
    pub email: String,
    /// bcrypt hash of the account password; omitted from responses
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Role name; `None` until an administrator assigns one
    pub role: Option<String>,
}

/// Insert an account with a null role and return the stored row
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Account email
/// * `password_hash` - bcrypt hash, already computed by the caller
pub async fn create_user_info(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<UserInfo, sqlx::Error> {
    sqlx::query_as::<_, UserInfo>(
        r#"
        INSERT INTO users (email, password, role)
        VALUES (?, ?, NULL)
        RETURNING user_id, email, password, role
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Fetch all accounts ordered by id
pub async fn list_user_info(pool: &SqlitePool) -> Result<Vec<UserInfo>, sqlx::Error> {
    sqlx::query_as::<_, UserInfo>(
        r#"
        SELECT user_id, email, password, role
        FROM users
        ORDER BY user_id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetch an account by id
///
/// # Returns
/// Account or None if not found
pub async fn get_user_info(pool: &SqlitePool, id: i64) -> Result<Option<UserInfo>, sqlx::Error> {
    sqlx::query_as::<_, UserInfo>(
        r#"
        SELECT user_id, email, password, role
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetch an account by email
///
/// Used by registration (duplicate check) and token issuance (login lookup).
pub async fn get_user_info_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserInfo>, sqlx::Error> {
    sqlx::query_as::<_, UserInfo>(
        r#"
        SELECT user_id, email, password, role
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Replace an account row by id, returning the affected-row count
pub async fn update_user_info(pool: &SqlitePool, user: &UserInfo) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET email = ?, password = ?, role = ?
        WHERE user_id = ?
        "#,
    )
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.role)
    .bind(user.user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete an account by id and return the removed row
///
/// # Returns
/// The deleted account, or None if no row had this id
pub async fn delete_user_info(pool: &SqlitePool, id: i64) -> Result<Option<UserInfo>, sqlx::Error> {
    sqlx::query_as::<_, UserInfo>(
        r#"
        DELETE FROM users
        WHERE user_id = ?
        RETURNING user_id, email, password, role
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether an account row exists
pub async fn user_info_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM users WHERE user_id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
