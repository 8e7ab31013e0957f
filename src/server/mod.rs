//! Server Module
//!
//! This module owns startup: configuration loading, state construction, and
//! application assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - AppConfig loaded from environment variables
//! ├── state.rs  - AppState (pool + config) and FromRef impls
//! └── init.rs   - Pool construction, migrations, router assembly
//! ```
//!
//! # Startup Flow
//!
//! `main` loads [`config::AppConfig`] from the environment and hands it to
//! [`init::create_app`], which connects the pool, runs migrations, and
//! returns the router. Configuration is immutable after load; every component
//! receives it through [`state::AppState`] rather than reading the
//! environment itself.

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Startup assembly
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use state::AppState;
