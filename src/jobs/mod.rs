//! Jobs Module
//!
//! Job resource: the row model with server-side code assignment, gateway
//! queries, and HTTP handlers with reference pre-validation.
//!
//! # Module Structure
//!
//! ```text
//! jobs/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Job row + gateway queries (code minting lives here)
//! └── handlers.rs - HTTP handlers (create, list, get, update)
//! ```

/// Job row and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the entity
pub use db::Job;
