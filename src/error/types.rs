//! API Error Types
//!
//! This module defines the error type shared by all HTTP handlers, plus the
//! field-level validation error carried by validation failures.
//!
//! # Error Categories
//!
//! - Validation failures carry one entry per offending field and map to 400.
//! - Plain-message rejections (id mismatch, duplicate email, bad credentials)
//!   map to 400 and keep their exact message as the response body.
//! - Not-found maps to 404 with an empty body.
//! - Authentication/authorization failures map to 401/403.
//! - Write conflicts and storage/hash/signing failures map to 500; their
//!   detail is logged server-side and never sent to the client.

use axum::http::StatusCode;
use thiserror::Error;

/// A single field-level validation failure
///
/// Field names use the JSON spelling of the offending field
/// (e.g. `locationId`, not `location_id`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldError {
    /// JSON name of the offending field
    pub field: String,
    /// Human-readable description of what is wrong with it
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors produced by HTTP handlers
///
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`]
/// and renders through the `IntoResponse` impl in the `conversion` module, so
/// handlers can return `Result<_, ApiError>` and use `?` on storage, hashing,
/// and token operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("validation failed")]
    Validation {
        /// Per-field failure details
        errors: Vec<FieldError>,
    },

    /// Request rejected with an exact plain-text message
    ///
    /// Used where the response body is part of the contract:
    /// `User already exists`, `Invalid credentials`, `Wrong password.`,
    /// and the update id-mismatch rejection.
    #[error("{message}")]
    BadRequest {
        /// Message returned verbatim as the response body
        message: String,
    },

    /// The addressed row does not exist
    #[error("resource not found")]
    NotFound,

    /// Missing or invalid bearer token
    #[error("{message}")]
    Unauthorized {
        /// Human-readable reason
        message: String,
    },

    /// Authenticated principal lacks the required role
    #[error("{message}")]
    Forbidden {
        /// Human-readable reason
        message: String,
    },

    /// A guarded update affected zero rows while the row still exists
    ///
    /// Surfaced as a fatal failure; there is no retry or merge.
    #[error("write conflict: {message}")]
    WriteConflict {
        /// Which row conflicted
        message: String,
    },

    /// Storage operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing or verification failed outside the auth middleware
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error from field-level details
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Create a 400 rejection whose message is the response body
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 401 rejection
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a 403 rejection
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a write-conflict error for a row that changed under an update
    pub fn write_conflict(message: impl Into<String>) -> Self {
        Self::WriteConflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `BadRequest` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `WriteConflict`, `Database`, `Hash`, `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::WriteConflict { .. } | Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation(vec![FieldError::new("title", "Title is required")]);
        match error {
            ApiError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "title");
                assert_eq!(errors[0].message, "Title is required");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_bad_request_keeps_message() {
        let error = ApiError::bad_request("User already exists");
        assert_eq!(error.to_string(), "User already exists");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_code_mapping() {
        let validation = ApiError::validation(vec![]);
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);

        let unauthorized = ApiError::unauthorized("Missing Authorization header");
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        let forbidden = ApiError::forbidden("Admin role required");
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let conflict = ApiError::write_conflict("department 1 changed concurrently");
        assert_eq!(conflict.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_error() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match &error {
            ApiError::Database(_) => {}
            _ => panic!("Expected Database variant"),
        }
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_error_serializes_with_json_names() {
        let error = FieldError::new("locationId", "Location 7 does not exist");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["field"], "locationId");
        assert_eq!(json["message"], "Location 7 does not exist");
    }
}
