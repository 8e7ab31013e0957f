//! Users Module
//!
//! Account resource (`UserInfo`): row model with hash-only password storage,
//! gateway queries, and HTTP handlers for registration plus the Admin-gated
//! CRUD surface.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Account row + gateway queries
//! └── handlers.rs - Registration + Admin-gated list/get/update/delete
//! ```
//!
//! # Registration Flow
//!
//! 1. Validate that email and password are present
//! 2. Look the email up; answer `User already exists` if a row holds it
//! 3. Hash the password with bcrypt and insert with a null role
//!
//! Role assignment happens afterwards through the Admin-gated update
//! handler; freshly registered accounts hold no role and cannot reach the
//! gated surface.

/// Account row and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the entity
pub use db::UserInfo;
