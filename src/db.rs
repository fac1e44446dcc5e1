//! Connection pool and schema bootstrap.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;
    log::info!(
        "Connected to database (max {} connections)",
        config.database_max_connections
    );
    Ok(pool)
}

/// Applies the SQL migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    log::info!("Running database migrations");
    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            log::info!("Database schema is up to date");
            Ok(())
        }
        Err(e) => {
            log::warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
