//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  Adapter Startup (REST / SOAP / Desktop)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure pool settings                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + run migrations            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐ ┌─────┐       │                           │
//! │  │  │Conn1│ │Conn2│ │Conn3│ │Conn4│ ...   │  (max_connections)        │
//! │  │  └─────┘ └─────┘ └─────┘ └─────┘       │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Request 1 ──► Conn1 ──► BEGIN … COMMIT                                │
//! │  Request 2 ──► Conn2 ──► BEGIN … COMMIT (waits on write lock)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode + Busy Timeout
//! Readers never block writers and writers never block readers. Writers
//! serialize on the database write lock; `busy_timeout` makes a second
//! writer wait for the lock instead of failing with `SQLITE_BUSY`.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductStore;

/// Path value that selects a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

/// Database file used by the servers when `INVENTORY_DB_PATH` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "./inventory.db";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/inventory.db")
///     .max_connections(5)
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// How long to wait for a pooled connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// How long a writer waits for the SQLite write lock.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Loads the server configuration from the environment.
    ///
    /// ## Variables
    /// - `INVENTORY_DB_PATH` (default `./inventory.db`)
    /// - `INVENTORY_DB_MAX_CONNECTIONS` (default `5`)
    /// - `INVENTORY_DB_CONNECT_TIMEOUT_MS` (default `30000`)
    /// - `INVENTORY_DB_BUSY_TIMEOUT_MS` (default `5000`)
    pub fn from_env() -> DbResult<Self> {
        let path = env::var("INVENTORY_DB_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        let defaults = DbConfig::new(path);

        let max_connections = env_or("INVENTORY_DB_MAX_CONNECTIONS", defaults.max_connections)?;
        let connect_timeout_ms = env_or(
            "INVENTORY_DB_CONNECT_TIMEOUT_MS",
            defaults.connect_timeout.as_millis() as u64,
        )?;
        let busy_timeout_ms = env_or(
            "INVENTORY_DB_BUSY_TIMEOUT_MS",
            defaults.busy_timeout.as_millis() as u64,
        )?;

        Ok(defaults
            .max_connections(max_connections)
            .connect_timeout(Duration::from_millis(connect_timeout_ms))
            .busy_timeout(Duration::from_millis(busy_timeout_ms)))
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the write-lock wait.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::in_memory()).await?;
    /// // Database is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Whether this configuration selects an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY_PATH
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            // Each `sqlite::memory:` parse yields a distinct database
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                // WAL mode: Readers don't block writers, writers don't block readers
                .journal_mode(SqliteJournalMode::Wal)
                // NORMAL synchronous: Good balance of durability and speed
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true)
        };

        Ok(options.busy_timeout(self.busy_timeout))
    }
}

/// Parses `name` if set, otherwise returns `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> DbResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DbError::InvalidConfig(name.to_string())),
        Err(_) => Ok(default),
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing store access.
///
/// Constructed once at adapter startup and handed to whatever needs it;
/// there is no module-level connection. Cloning is cheap (the pool is an
/// `Arc` internally).
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Creates a new database connection pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL, NORMAL synchronous, busy timeout)
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or migration failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout));

        if config.is_in_memory() {
            // Recycling the only connection would discard the database
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs database migrations.
    ///
    /// Idempotent: safe to run from every adapter on every startup.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns `(total, applied)` migration counts.
    pub async fn migration_status(&self) -> DbResult<(usize, usize)> {
        migrations::migration_status(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer the store methods; this is for diagnostics and tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the Product Store.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().list(Page::default()).await?;
    /// ```
    pub fn products(&self) -> ProductStore {
        ProductStore::new(self.pool.clone())
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, all store operations fail with a storage error.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::new(DbConfig::in_memory()).await.unwrap();
        let second = Database::new(DbConfig::in_memory()).await.unwrap();

        first
            .products()
            .create(inventory_core::NewProduct::new("Only here", 1, 1.0))
            .await
            .unwrap();

        assert_eq!(first.products().count().await.unwrap(), 1);
        assert_eq!(second.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_pool_fails_health_check() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .busy_timeout(Duration::from_millis(250))
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert!(!config.run_migrations);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    // The only test that touches INVENTORY_DB_* variables
    #[test]
    fn test_config_from_env() {
        let vars = [
            "INVENTORY_DB_PATH",
            "INVENTORY_DB_MAX_CONNECTIONS",
            "INVENTORY_DB_CONNECT_TIMEOUT_MS",
            "INVENTORY_DB_BUSY_TIMEOUT_MS",
        ];
        for var in vars {
            env::remove_var(var);
        }

        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));

        env::set_var("INVENTORY_DB_PATH", "/tmp/shop.db");
        env::set_var("INVENTORY_DB_MAX_CONNECTIONS", " 8 ");
        env::set_var("INVENTORY_DB_CONNECT_TIMEOUT_MS", "1500");
        env::set_var("INVENTORY_DB_BUSY_TIMEOUT_MS", "250");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.connect_timeout, Duration::from_millis(1500));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));

        env::set_var("INVENTORY_DB_BUSY_TIMEOUT_MS", "soon");
        let err = DbConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for INVENTORY_DB_BUSY_TIMEOUT_MS");

        for var in vars {
            env::remove_var(var);
        }
    }

    #[tokio::test]
    async fn test_migration_status_after_connect() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let (total, applied) = db.migration_status().await.unwrap();
        assert_eq!(total, applied);
    }
}
