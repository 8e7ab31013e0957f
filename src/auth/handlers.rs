//! Token Issuance Handler
//!
//! This module implements `POST /api/Token`, the password-for-token exchange.
//!
//! # Authentication Process
//!
//! 1. Reject requests missing either credential
//! 2. Look the account up by email
//! 3. Verify the password against the stored bcrypt hash
//! 4. Sign and return the bearer token as a plain-text body
//!
//! # Security
//!
//! - Passwords are verified with bcrypt against the stored hash; plaintext is
//!   never logged
//! - Rejections are 400 with short fixed messages (`Invalid credentials` for
//!   an unknown email, `Wrong password.` for a failed verify)
//! - Tokens carry the account's id, email, and role, signed with the
//!   configured key

use axum::{extract::State, response::Json};
use bcrypt::verify;
use serde::Deserialize;

use crate::auth::tokens::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_info_by_email;

/// Token request body
///
/// Both fields are optional so a missing credential is answered with 400
/// instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Account email
    pub email: Option<String>,
    /// Account password in plaintext
    pub password: Option<String>,
}

/// Issue a bearer token for valid credentials
///
/// # Arguments
///
/// * `State(state)` - Pool for the account lookup plus the signing parameters
/// * `Json(request)` - Credentials
///
/// # Returns
///
/// `200 OK` with the raw token string as the body
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
/// * `400 Bad Request` - Missing credentials, unknown email
///   (`Invalid credentials`), or failed verify (`Wrong password.`)
/// * `500 Internal Server Error` - Storage, hash, or signing failure
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<String, ApiError> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::warn!("Token request with missing credentials");
            return Err(ApiError::bad_request("Missing credentials"));
        }
    };

    let user = get_user_info_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token request for unknown email: {}", email);
            ApiError::bad_request("Invalid credentials")
        })?;

    let valid = verify(&password, &user.password)?;
    if !valid {
        tracing::warn!("Token request with wrong password for: {}", email);
        return Err(ApiError::bad_request("Wrong password."));
    }

    let token = create_token(&state.config.jwt, &user)?;
    tracing::info!("Issued token for account {} ({})", user.user_id, user.email);

    Ok(token)
}
