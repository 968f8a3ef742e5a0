pub mod repository;
pub mod session;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Settings;
use crate::models::CourseTable;

pub use session::Session;

pub async fn connect(settings: &Settings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.db_max_connections)
        .connect_with(options)
        .await?;

    info!(
        "connected to {} (max {} connections)",
        settings.db_url, settings.db_max_connections
    );
    Ok(pool)
}

/// Creates the `course` table when it does not exist yet. Idempotent.
pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CourseTable::CREATE).execute(db).await?;
    Ok(())
}
