//! Database migration utilities.

use crate::config::Config;
use platefinder_store::SqliteRecipeStore;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;
use std::str::FromStr;

/// Create the database (if missing) and run the schema migration.
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.database.url, "migrating recipes database");

    let options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    SqliteRecipeStore::new(pool).migrate().await?;
    Ok(())
}

/// Drop the database file if it exists, then recreate it.
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    let db_file = config.database.url.trim_start_matches("sqlite:");
    if db_file != ":memory:" && Path::new(db_file).exists() {
        std::fs::remove_file(db_file)?;
        tracing::info!(file = db_file, "dropped database");
    }

    migrate(config).await
}
