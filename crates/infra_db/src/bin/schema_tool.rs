//! Schema administration tool for the rental booking database
//!
//! # Usage
//!
//! ```bash
//! # Create tables, constraints, and views
//! cargo run --bin schema_tool -- init
//!
//! # Remove all data, keep the schema
//! cargo run --bin schema_tool -- clear
//!
//! # Drop everything
//! cargo run --bin schema_tool -- drop
//! ```
//!
//! # Environment Variables
//!
//! * `RENTAL_DATABASE_URL` - PostgreSQL connection string (required)
//! * `RENTAL_MAX_CONNECTIONS` / `RENTAL_MIN_CONNECTIONS` - pool sizing
//! * `RUST_LOG` - log filter (default: info)

use anyhow::{bail, Context};
use infra_db::{create_pool, DatabaseConfig, SchemaManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = match std::env::args().nth(1) {
        Some(cmd) => cmd,
        None => bail!("usage: schema_tool <init|clear|drop>"),
    };

    let config = DatabaseConfig::from_env()
        .context("Failed to load configuration (is RENTAL_DATABASE_URL set?)")?;
    let pool = create_pool(config).await?;
    let schema = SchemaManager::new(pool);

    match command.as_str() {
        "init" => {
            schema.init().await?;
            tracing::info!("Schema initialized");
        }
        "clear" => {
            schema.clear_data().await?;
            tracing::info!("All data cleared");
        }
        "drop" => {
            schema.drop_all().await?;
            tracing::info!("Schema dropped");
        }
        other => bail!("unknown command '{other}', expected init, clear, or drop"),
    }

    Ok(())
}
