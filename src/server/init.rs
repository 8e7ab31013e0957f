//! Server Initialization
//!
//! This module assembles the application at startup: connection pool,
//! migrations, state, and router.
//!
//! # Initialization Process
//!
//! 1. Build the SQLite pool from the configured URL (creating the database
//!    file if missing, with foreign keys enforced)
//! 2. Run embedded migrations
//! 3. Wrap pool + configuration into [`AppState`]
//! 4. Build the router
//!
//! Any failure aborts startup; the server never runs against a database
//! whose schema could not be prepared.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Startup failure
#[derive(Debug, Error)]
pub enum InitError {
    /// Pool construction or connection failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Build the SQLite connection pool
///
/// Foreign keys are enabled on every connection so the restrict rules on job
/// references hold at the store level. WAL journaling and a busy timeout keep
/// concurrent writers from tripping over file locks; both are no-ops for
/// in-memory databases.
pub async fn connect_pool(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}

/// Build the application state: pool, migrations, configuration
///
/// Exposed separately from [`create_app`] so integration tests can keep a
/// handle on the pool while driving the same router.
///
/// # Errors
///
/// Returns [`InitError`] if the pool cannot be built or migrations fail.
pub async fn build_state(config: AppConfig) -> Result<AppState, InitError> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(AppState {
        db: pool,
        config: Arc::new(config),
    })
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Immutable configuration loaded by the caller
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns [`InitError`] if the database cannot be reached or migrated.
pub async fn create_app(config: AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing server");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
