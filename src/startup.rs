//! Startup utilities for database connectivity and storage.

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensure the upload storage root exists before the static mount serves it.
pub async fn prepare_storage(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.storage_root).await?;

    Ok(())
}
