//! Schema management
//!
//! Creates, clears, and drops the rental booking schema. The DDL itself
//! lives in `migrations/` and is applied verbatim, so tests and the
//! `schema_tool` binary exercise exactly the schema production uses.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// The initial schema DDL (tables, constraints, views)
pub const INITIAL_SCHEMA: &str =
    include_str!("../../../migrations/20240101_000001_initial_schema.sql");

/// All tables, in an order safe for cascaded truncation
const TABLES: [&str; 6] = [
    "reviews",
    "reservations",
    "ownerships",
    "apartments",
    "customers",
    "owners",
];

/// Manages the lifecycle of the rental booking schema
#[derive(Debug, Clone)]
pub struct SchemaManager {
    pool: PgPool,
}

impl SchemaManager {
    /// Creates a new SchemaManager with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates all tables, constraints, and views
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::MigrationFailed` if any DDL statement fails
    /// (including when the schema already exists).
    pub async fn init(&self) -> Result<(), DatabaseError> {
        info!("Initializing rental booking schema");
        sqlx::raw_sql(INITIAL_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    /// Removes all rows from all tables while preserving the schema
    pub async fn clear_data(&self) -> Result<(), DatabaseError> {
        info!("Clearing all rental booking data");
        for table in TABLES {
            sqlx::query(&format!("TRUNCATE TABLE {} CASCADE", table))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Drops all views and tables
    ///
    /// Safe to call on a partially created or missing schema.
    pub async fn drop_all(&self) -> Result<(), DatabaseError> {
        info!("Dropping rental booking schema");
        sqlx::raw_sql(
            "DROP VIEW IF EXISTS apartment_ratings CASCADE; \
             DROP TABLE IF EXISTS reviews CASCADE; \
             DROP TABLE IF EXISTS reservations CASCADE; \
             DROP TABLE IF EXISTS ownerships CASCADE; \
             DROP TABLE IF EXISTS apartments CASCADE; \
             DROP TABLE IF EXISTS customers CASCADE; \
             DROP TABLE IF EXISTS owners CASCADE;",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }
}
