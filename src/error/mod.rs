//! Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and FieldError definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Status Code Mapping
//!
//! - Validation failures and exact-message rejections - 400
//! - Missing rows - 404
//! - Missing/invalid bearer token - 401, wrong role - 403
//! - Write conflicts and storage/hash/signing failures - 500
//!
//! Handlers return `Result<_, ApiError>`; storage, hashing, and token errors
//! convert automatically through `From`, so `?` is enough on those calls.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, FieldError};
