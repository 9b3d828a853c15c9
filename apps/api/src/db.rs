use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Connects the shared pool. Fails startup when the database is unreachable.
/// Tables are expected to exist already (see `migrations/0001_init.sql`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Could not connect to PostgreSQL at DATABASE_URL")?;

    info!("PostgreSQL pool ready (max {max_connections} connections)");
    Ok(pool)
}
