//! # Database State
//!
//! Wraps the `Database` connection owned by the window.
//!
//! The `Database` from `inventory-db` contains a `SqlitePool`, so handlers
//! never hold a connection between calls.

use inventory_db::{Database, ProductStore};

/// Wrapper around `Database` for window state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Shorthand for `inner().products()`.
    pub fn products(&self) -> ProductStore {
        self.db.products()
    }
}
