//! Locations Module
//!
//! Location resource: row model, gateway queries, and HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! locations/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Location row + gateway queries
//! └── handlers.rs - HTTP handlers (create, get, update)
//! ```

/// Location row and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the entity
pub use db::Location;
