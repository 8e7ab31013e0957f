//! Application State Management
//!
//! This module defines the application state structure and implements the
//! `FromRef` traits for Axum state extraction.
//!
//! # Architecture
//!
//! [`AppState`] is the single state container for the router, holding:
//! - The SQLite connection pool (the per-request store session is a pool
//!   checkout scoped to each query)
//! - The immutable [`AppConfig`] built at startup
//!
//! # State Extraction
//!
//! The `FromRef` implementations let handlers extract just the part they
//! need: most resource handlers take `State<SqlitePool>`, while the token
//! handler and the auth middleware take the full `State<AppState>` for the
//! JWT parameters.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    ///
    /// Each query checks a connection out for the duration of that round-trip
    /// only; the pool guard releases it on every exit path.
    pub db: SqlitePool,

    /// Immutable configuration loaded at startup
    pub config: Arc<AppConfig>,
}

/// Allow handlers to extract the pool directly with `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the configuration directly with `State<Arc<AppConfig>>`
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
