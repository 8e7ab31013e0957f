//! Error Conversion
//!
//! This module converts [`ApiError`] values into HTTP responses so handlers
//! can return them directly with `?`.
//!
//! # Response Format
//!
//! Validation failures return a JSON body:
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "errors": [
//!     { "field": "title", "message": "Title is required" }
//!   ]
//! }
//! ```
//!
//! Plain-message rejections (id mismatch, duplicate email, bad credentials,
//! missing/invalid token, wrong role) return the message as a plain-text
//! body, not-found returns an empty body, and every 500-class failure returns
//! a generic body after logging the real cause.

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation { errors } => {
                let body = serde_json::json!({
                    "error": "Validation failed",
                    "errors": errors,
                });
                (status, Json(body)).into_response()
            }
            ApiError::BadRequest { message } => (status, message).into_response(),
            ApiError::NotFound => status.into_response(),
            ApiError::Unauthorized { message } => (status, message).into_response(),
            ApiError::Forbidden { message } => (status, message).into_response(),
            // Internal failures are logged with their detail; the client only
            // sees a generic body.
            err @ (ApiError::WriteConflict { .. }
            | ApiError::Database(_)
            | ApiError::Hash(_)
            | ApiError::Token(_)) => {
                tracing::error!("Request failed: {err}");
                (status, "Internal server error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::FieldError;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_renders_400() {
        let error = ApiError::validation(vec![FieldError::new("title", "Title is required")]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_renders_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_failure_hides_detail() {
        let error: ApiError = sqlx::Error::PoolClosed.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
