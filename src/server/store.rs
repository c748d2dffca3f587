//! Lazily established, process-wide store connection.
//!
//! The handle is created from configuration at startup and shared through `AppState`.
//! The first caller of [`StoreHandle::connection`] connects and applies pending
//! migrations; every later caller receives the same connection. Callers arriving while
//! the first attempt is in flight wait for it instead of starting their own.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::OnceCell;

pub struct StoreHandle {
    database_url: String,
    connection: OnceCell<DatabaseConnection>,
}

impl StoreHandle {
    /// Creates a handle that connects to `database_url` on first use.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            connection: OnceCell::new(),
        }
    }

    /// Creates a handle around an already established connection.
    ///
    /// Used by tests that prepare their own in-memory database.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            database_url: String::new(),
            connection: OnceCell::new_with(Some(db)),
        }
    }

    /// Returns the memoized connection, establishing it first if needed.
    ///
    /// A failed attempt is not remembered: the error goes to every caller waiting on
    /// that attempt and the next call tries again.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The shared connection, migrations applied
    /// - `Err(DbErr)` - Connecting or migrating failed
    pub async fn connection(&self) -> Result<&DatabaseConnection, DbErr> {
        self.connection
            .get_or_try_init(|| connect_to_database(&self.database_url))
            .await
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    /// Connection string the handle was configured with.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - Connection string, e.g. `sqlite://loanlink.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(DbErr)` - Failed to connect to database or run migrations
async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to store");

    Ok(db)
}
