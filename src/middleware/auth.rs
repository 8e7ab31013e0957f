//! Role-Gating Middleware
//!
//! This module protects the account routes that require the Admin role. It
//! runs entirely before the handler body: extract the bearer token, verify
//! it, check the role claim.
//!
//! Missing or unverifiable tokens are answered with 401; a valid token whose
//! role is not `Admin` gets 403. The check is a pure predicate over the
//! verified claims - no database round-trip is involved.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Role required by the gated account routes
pub const ADMIN_ROLE: &str = "Admin";

/// Admin capability check
///
/// This middleware:
/// 1. Extracts the JWT from the `Authorization: Bearer` header
/// 2. Verifies signature, expiry, issuer, and audience
/// 3. Requires the `role` claim to equal `Admin`
///
/// # Errors
///
/// * `401 Unauthorized` - Header missing, malformed, or token invalid
/// * `403 Forbidden` - Token valid but the role claim is not `Admin`
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Missing Authorization header")
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Invalid Authorization header format")
    })?;

    let claims = verify_token(&state.config.jwt, token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::unauthorized("Invalid token")
    })?;

    if claims.role.as_deref() != Some(ADMIN_ROLE) {
        tracing::warn!("Account {} denied: Admin role required", claims.email);
        return Err(ApiError::forbidden("Admin role required"));
    }

    tracing::debug!("Admin access granted to {}", claims.email);
    Ok(next.run(request).await)
}
