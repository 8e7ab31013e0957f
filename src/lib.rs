//! Orgcore - Organization Directory API
//!
//! Orgcore is a CRUD web API over an organization's structure: departments,
//! locations, and the jobs tying them together, plus the accounts that manage
//! them. It is built on Axum with SQLite storage via sqlx, bcrypt password
//! hashing, and JWT bearer tokens.
//!
//! # Overview
//!
//! Every operation is a single guarded database round-trip: validate the
//! request shape, call the persistence gateway, map the result onto a status
//! code. There is no caching, no background work, and no state outside the
//! store; concurrency is whatever the async server and the connection pool
//! already provide.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs         - Crate root
//! ├── main.rs        - Server binary entry point
//! ├── server/        - Configuration, state, startup assembly
//! ├── routes/        - Router construction and endpoint table
//! ├── error/         - ApiError and its response conversion
//! ├── middleware/    - Admin role gate
//! ├── auth/          - Token create/verify + POST /api/Token
//! ├── departments/   - Department resource
//! ├── locations/     - Location resource
//! ├── jobs/          - Job resource (server-minted codes)
//! └── users/         - Accounts: registration + Admin-gated CRUD
//! ```
//!
//! # Access Policy
//!
//! Two tiers only: the account list/get/update/delete routes require a
//! bearer token whose `role` claim is `Admin`; everything else, including
//! registration and token issuance, is unauthenticated.
//!
//! # Example
//!
//! ```rust,no_run
//! use orgcore::server::config::AppConfig;
//! use orgcore::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Configuration, state, and startup assembly
pub mod server;

/// Router construction and endpoint table
pub mod routes;

/// Handler error type and response conversion
pub mod error;

/// Request-level role gating
pub mod middleware;

/// Bearer tokens and the token endpoint
pub mod auth;

/// Department resource
pub mod departments;

/// Location resource
pub mod locations;

/// Job resource
pub mod jobs;

/// Account resource
pub mod users;
