//! Middleware Module
//!
//! Request-level checks that run before handler bodies.
//!
//! # Module Structure
//!
//! ```text
//! middleware/
//! ├── mod.rs  - Module exports and documentation
//! └── auth.rs - Admin role gate for the account routes
//! ```
//!
//! The access policy has exactly two tiers: routes layered with
//! [`auth::require_admin`], and routes with no authentication at all. There
//! is no finer-grained or owner-based authorization.

/// Admin role gate
pub mod auth;

// Re-export the middleware entry point
pub use auth::require_admin;
