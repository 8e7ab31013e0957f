//! Server Configuration
//!
//! This module loads and validates server configuration from environment
//! variables. Configuration is read exactly once at startup into an immutable
//! [`AppConfig`] that is injected into the router state; nothing reads the
//! environment after load.
//!
//! # Configuration Sources
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DATABASE_URL` | SQLite URL (`sqlite:orgcore.db`, `sqlite::memory:`) | required |
//! | `DATABASE_MAX_CONNECTIONS` | connection pool size | `5` |
//! | `SERVER_PORT` | TCP port to bind | `3000` |
//! | `JWT_SECRET` | HMAC-SHA256 signing key | required |
//! | `JWT_ISSUER` | `iss` claim, validated on decode | `orgcore` |
//! | `JWT_AUDIENCE` | `aud` claim, validated on decode | `orgcore-clients` |
//! | `JWT_SUBJECT` | fixed `sub` claim on every token | `orgcore-auth` |
//! | `JWT_TTL_SECS` | token lifetime in seconds | five years |
//!
//! # Error Handling
//!
//! Missing required variables and unparseable values fail startup with a
//! [`ConfigError`] naming the variable; the server never runs with a partial
//! configuration.

use std::str::FromStr;

use thiserror::Error;

/// Default token lifetime: five years in seconds.
///
/// Unusually long for a bearer token, but kept as the default so existing
/// clients keep working; deployments shorten it via `JWT_TTL_SECS`.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 5 * 365 * 24 * 60 * 60;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("{0} is not set")]
    MissingVar(&'static str),

    /// An environment variable is present but unparseable
    #[error("invalid value for {var}: {value}")]
    InvalidVar {
        /// Variable name
        var: &'static str,
        /// The offending value
        value: String,
    },
}

/// Token signing and validation parameters
///
/// Injected into the token issuer and the auth middleware; both sides derive
/// their keys from the same secret, and `issuer`/`audience` are validated on
/// every decode.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric HMAC-SHA256 signing key
    pub secret: String,
    /// Value of the `iss` claim
    pub issuer: String,
    /// Value of the `aud` claim
    pub audience: String,
    /// Fixed value of the `sub` claim
    pub subject: String,
    /// Token lifetime in seconds
    pub ttl_secs: u64,
}

/// Immutable application configuration
///
/// Built once by [`AppConfig::from_env`] (or constructed directly in tests)
/// and shared through the router state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Connection pool size
    pub database_max_connections: u32,
    /// TCP port the server binds
    pub server_port: u16,
    /// Token signing parameters
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `DATABASE_URL` or `JWT_SECRET` is missing,
    /// or if a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let secret = require_var("JWT_SECRET")?;
        if secret.len() < 32 {
            tracing::warn!("JWT_SECRET is shorter than 32 bytes; use a longer key in production");
        }

        Ok(Self {
            database_url,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            jwt: JwtConfig {
                secret,
                issuer: var_or("JWT_ISSUER", "orgcore"),
                audience: var_or("JWT_AUDIENCE", "orgcore-clients"),
                subject: var_or("JWT_SUBJECT", "orgcore-auth"),
                ttl_secs: parse_var("JWT_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?,
            },
        })
    }
}

/// Read a required environment variable
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Read an optional environment variable with a default
fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an optional environment variable with a default
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var: name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        std::env::remove_var("ORGCORE_TEST_UNSET_VAR");
        let value: u32 = parse_var("ORGCORE_TEST_UNSET_VAR", 5).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_parse_var_reads_value() {
        std::env::set_var("ORGCORE_TEST_PORT_VAR", "8080");
        let value: u16 = parse_var("ORGCORE_TEST_PORT_VAR", 3000).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        std::env::set_var("ORGCORE_TEST_BAD_VAR", "not-a-number");
        let result: Result<u16, _> = parse_var("ORGCORE_TEST_BAD_VAR", 3000);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_ttl_is_five_years() {
        assert_eq!(DEFAULT_TOKEN_TTL_SECS, 157_680_000);
    }
}
