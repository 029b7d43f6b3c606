use crate::{DbError, PoolSettings, Result};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Open (creating if missing) the user database and bring its schema up to date.
pub async fn connect(db_path: &Path, settings: &PoolSettings) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(settings.busy_timeout)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    info!(
        "Database connection established: {} (max {} connections)",
        db_path.display(),
        settings.max_connections
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    debug!("Running database migrations");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
