//! # inventory-db: The Product Store
//!
//! This crate is the sole owner of product state. Every mutation from every
//! front end passes through [`ProductStore`], which validates input before
//! touching SQLite.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Data Flow                              │
//! │                                                                         │
//! │  Adapter (POST /products, CreateProduct, Create button)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ ProductStore  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ create / get  │    │ 001_create_  │  │   │
//! │  │   │ Connection    │    │ list / update │    │   products   │  │   │
//! │  │   │ Management    │    │ delete        │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The Product Store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_core::NewProduct;
//! use inventory_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./inventory.db")).await?;
//!
//! let widget = db.products().create(NewProduct::new("Widget", 100, 9.99)).await?;
//! let same = db.products().get(widget.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductStore;
