//! Database Test Utilities
//!
//! Provides helpers for database testing including testcontainer management
//! and connection pooling for integration tests.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};
use tokio::sync::OnceCell;

use infra_db::SchemaManager;

/// Default PostgreSQL image for testing
const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "rental_test";

/// Configuration for a test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A wrapper around a PostgreSQL test container with an initialized schema
pub struct TestDatabase {
    _container: ContainerAsync<GenericImage>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container and initializes the rental schema
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or the schema fails
    /// to initialize.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_exposed_port(5432.tcp())
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host,
            port,
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.connection_url())
            .await?;

        let test_db = Self {
            _container: container,
            config,
            pool,
        };

        // Apply the production schema verbatim
        SchemaManager::new(test_db.pool.clone()).init().await?;

        Ok(test_db)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clears all data while preserving the schema
    ///
    /// Useful for resetting state between tests.
    pub async fn clear_data(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SchemaManager::new(self.pool.clone()).clear_data().await?;
        Ok(())
    }
}

/// Global test database for shared integration tests
static SHARED_TEST_DB: OnceCell<Arc<TestDatabase>> = OnceCell::const_new();

/// Gets or creates a shared test database instance
///
/// Provides a singleton test database shared across tests to reduce
/// container startup overhead.
///
/// # Panics
///
/// Panics if the database fails to initialize.
pub async fn get_shared_test_database() -> Arc<TestDatabase> {
    SHARED_TEST_DB
        .get_or_init(|| async {
            Arc::new(
                TestDatabase::new()
                    .await
                    .expect("Failed to create shared test database"),
            )
        })
        .await
        .clone()
}

/// Creates an isolated test database for a single test
///
/// Use this when tests modify data and isolation is required.
pub async fn create_isolated_test_database(
) -> Result<TestDatabase, Box<dyn std::error::Error + Send + Sync>> {
    TestDatabase::new().await
}
