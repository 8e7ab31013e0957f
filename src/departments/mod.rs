//! Departments Module
//!
//! Department resource: the row model with its database operations, and the
//! HTTP handlers mapping requests onto them.
//!
//! # Module Structure
//!
//! ```text
//! departments/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Department row + gateway queries
//! └── handlers.rs - HTTP handlers (create, list, get, update)
//! ```
//!
//! Departments are referenced by jobs; the job side validates that the
//! referenced department exists, and the schema's restrict rule keeps a
//! referenced department from being deleted underneath its jobs.

/// Department row and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the entity
pub use db::Department;
