//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for
//! PostgreSQL using SQLx. Configuration can be built programmatically or
//! loaded from the environment (`RENTAL_*` variables, `.env` supported).

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the PostgreSQL connection pool
pub type DatabasePool = PgPool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("postgres://localhost/rental")
///     .max_connections(20)
///     .min_connections(5)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
    /// Idle timeout before closing a connection
    pub idle_timeout: Duration,
}

/// Environment representation of the pool configuration
///
/// Read via the config crate with the `RENTAL` prefix, e.g.
/// `RENTAL_DATABASE_URL`, `RENTAL_MAX_CONNECTIONS`.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    database_url: String,
    max_connections: Option<u32>,
    min_connections: Option<u32>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    /// and sensible defaults for the pool settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(30),
            max_lifetime: Duration::from_secs(30 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }

    /// Loads configuration from `RENTAL_*` environment variables
    ///
    /// `RENTAL_DATABASE_URL` is required; `RENTAL_MAX_CONNECTIONS` and
    /// `RENTAL_MIN_CONNECTIONS` override the pool defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let env: EnvConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix("RENTAL"))
            .build()?
            .try_deserialize()?;

        let mut cfg = DatabaseConfig::new(env.database_url);
        if let Some(max) = env.max_connections {
            cfg = cfg.max_connections(max);
        }
        if let Some(min) = env.min_connections {
            cfg = cfg.min_connections(min);
        }
        Ok(cfg)
    }

    /// Sets the maximum number of connections in the pool (default: 10)
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain (default: 2)
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout duration (default: 30s)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the maximum lifetime of a connection (default: 30 min)
    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Sets the idle timeout before closing a connection (default: 10 min)
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("postgres://localhost/rental")
    }
}

/// Creates a database connection pool with the given configuration
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the pool cannot be created
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        "Creating database pool with max_connections={}, min_connections={}",
        config.max_connections, config.min_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}

/// Creates a connection pool from a URL string with default settings
pub async fn create_pool_from_url(url: &str) -> Result<DatabasePool, DatabaseError> {
    create_pool(DatabaseConfig::new(url)).await
}
