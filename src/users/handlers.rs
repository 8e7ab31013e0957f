//! Account Handlers
//!
//! HTTP handlers for the account resource:
//!
//! - `POST /api/UserInfo` - registration (no authentication)
//! - `GET /api/UserInfo` - list (Admin)
//! - `GET /api/UserInfo/{id}` - fetch one (Admin)
//! - `PUT /api/UserInfo/{id}` - full replace (Admin)
//! - `DELETE /api/UserInfo/{id}` - delete, returning the removed row (Admin)
//!
//! The Admin gate itself lives in the middleware module and runs before any
//! of the gated handlers; registration and everything below assume it has
//! already passed.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; plaintext is never
//!   written or logged
//! - Responses never carry the password column (the row type skips it on
//!   serialization)
//! - Duplicate registration is answered before hashing, so the rejection
//!   path does no bcrypt work

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::{ApiError, FieldError};
use crate::users::db;
use crate::users::db::UserInfo;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: String,
}

/// Register a new account
///
/// Checks email uniqueness by lookup-before-insert, hashes the password, and
/// stores the account with a null role. Roles are assigned later by an
/// administrator through the update handler.
///
/// # Example Request
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - Missing email/password (field-level detail), or
///   `User already exists` when the email is taken
/// * `500 Internal Server Error` - Hashing or storage failure
pub async fn register_user_info(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let mut errors = Vec::new();
    if request.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if request.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    if db::get_user_info_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already taken: {}", request.email);
        return Err(ApiError::bad_request("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let user = db::create_user_info(&pool, &request.email, &password_hash).await?;
    tracing::info!("Registered account {} ({})", user.user_id, user.email);

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all accounts
pub async fn list_user_info(State(pool): State<SqlitePool>) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let users = db::list_user_info(&pool).await?;
    Ok(Json(users))
}

/// Fetch an account by id
///
/// # Errors
///
/// * `404 Not Found` - No account with this id
pub async fn get_user_info(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = db::get_user_info(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// Replace an account by id
///
/// Email and role are taken from the body as-is. A non-empty password field
/// is hashed before storage; an empty one keeps the stored hash, so the
/// password column holds a bcrypt hash on every path.
///
/// # Errors
///
/// * `400 Bad Request` - Path id differs from body id
/// * `404 Not Found` - No account with this id
/// * `500 Internal Server Error` - The row changed concurrently, or hashing/storage failed
pub async fn update_user_info(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(user): Json<UserInfo>,
) -> Result<StatusCode, ApiError> {
    if id != user.user_id {
        tracing::warn!(
            "Account update rejected: path id {} does not match body id {}",
            id,
            user.user_id
        );
        return Err(ApiError::bad_request("Id in path does not match id in body"));
    }

    let mut user = user;
    if user.password.is_empty() {
        let existing = db::get_user_info(&pool, id).await?.ok_or(ApiError::NotFound)?;
        user.password = existing.password;
    } else {
        user.password = hash(&user.password, DEFAULT_COST)?;
    }

    let rows = db::update_user_info(&pool, &user).await?;
    if rows == 0 {
        return Err(if db::user_info_exists(&pool, id).await? {
            ApiError::write_conflict(format!("account {id} changed concurrently"))
        } else {
            ApiError::NotFound
        });
    }

    tracing::info!("Updated account {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an account by id, returning the removed row
///
/// # Errors
///
/// * `404 Not Found` - No account with this id
pub async fn delete_user_info(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = db::delete_user_info(&pool, id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!("Deleted account {} ({})", user.user_id, user.email);
    Ok(Json(user))
}
