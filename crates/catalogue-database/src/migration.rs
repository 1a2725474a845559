//! Schema migrations embedded from the workspace `migrations/` directory.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use tracing::info;

use catalogue_core::error::{AppError, ErrorKind};

/// Every migration the binary ships with.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply pending migrations. Already-applied versions are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!(available = MIGRATOR.iter().count(), "Applying catalogue schema");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Catalogue schema is up to date");
    Ok(())
}
