use migration::{MigratorTrait, StorageMigrator};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::StorageError;

/// Connect to the session storage database
///
/// Does NOT run migrations - call `migrate_storage_database()` separately.
pub async fn init_storage_database(database_url: &str) -> Result<DatabaseConnection, StorageError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| StorageError::database("connect_storage_database", e))?;

    tracing::debug!("Connected to storage database: {}", database_url);

    Ok(db)
}

/// Run all pending storage migrations
pub async fn migrate_storage_database(db: &DatabaseConnection) -> Result<(), StorageError> {
    StorageMigrator::up(db, None)
        .await
        .map_err(|e| StorageError::database("run_storage_migrations", e))?;

    tracing::debug!("Storage database migrations completed");

    Ok(())
}
