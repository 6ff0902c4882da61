use std::sync::Arc;

use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    media::storage::{LocalStorage, MediaStorage},
};

/// Opens the SQLite database and applies pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection with the schema up to date
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is migrated into the same Sqlite pool SeaORM uses. Sessions expire
/// after 7 days of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool stores the sessions
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Prepares the local media directory.
///
/// # Returns
/// - `Ok(Arc<dyn MediaStorage>)` - Storage rooted at `config.media_root`
/// - `Err(AppError::IoErr)` - The media root could not be created
pub async fn setup_media_storage(config: &Config) -> Result<Arc<dyn MediaStorage>, AppError> {
    tokio::fs::create_dir_all(&config.media_root).await?;

    tracing::info!("Serving media from {}", config.media_root.display());

    Ok(Arc::new(LocalStorage::new(config.media_root.clone())))
}
