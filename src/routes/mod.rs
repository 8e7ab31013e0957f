//! Routes Module
//!
//! Router assembly: the route table and the layered router construction.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - create_router (health, tracing, fallback)
//! └── api_routes.rs - configure_api_routes (the full endpoint table)
//! ```

/// Router construction
pub mod router;

/// API endpoint table
pub mod api_routes;

// Re-export the entry point
pub use router::create_router;
