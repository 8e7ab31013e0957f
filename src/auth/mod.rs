//! Authentication Module
//!
//! This module owns bearer tokens: building and verifying them, and the
//! HTTP handler that exchanges credentials for one.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── tokens.rs   - Claims struct + token create/verify
//! └── handlers.rs - POST /api/Token handler
//! ```
//!
//! # Token Flow
//!
//! 1. **Issue**: credentials arrive at `POST /api/Token`, the account is
//!    looked up, the password verified with bcrypt, and a signed JWT is
//!    returned as a plain-text body
//! 2. **Check**: the middleware module calls [`tokens::verify_token`] on the
//!    `Authorization: Bearer` header of gated requests and inspects the
//!    `role` claim
//!
//! Signing parameters live in the injected configuration; this module never
//! reads the environment.

/// Claims and token create/verify
pub mod tokens;

/// Token issuance handler
pub mod handlers;

// Re-export commonly used items
pub use tokens::{create_token, verify_token, Claims};
