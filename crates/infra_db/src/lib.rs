//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the rental booking
//! system on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository holds a
//! connection pool, executes parameterized SQL, and maps rows and database
//! errors to domain types. Consistency rules (double-booking, rating ranges,
//! referential integrity, the unique apartment address) are enforced by the
//! schema, so the repositories stay thin.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, OwnerRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/rental")).await?;
//! let repo = OwnerRepository::new(pool);
//! let owner = repo.get_by_id(owner_id).await?;
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{
    AnalyticsRepository, ApartmentRepository, CustomerRepository, OwnerRepository,
    OwnershipRepository, ReservationRepository, ReviewRepository,
};
pub use schema::SchemaManager;
