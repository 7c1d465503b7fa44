//! # State Module
//!
//! The pieces of state a `ProductWindow` is made of.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Window State                                         │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────────┐  │
//! │  │   DbState    │  │   ProductForm    │  │   ProductTable           │  │
//! │  │              │  │                  │  │                          │  │
//! │  │  Database    │  │  id / name /     │  │  rows: ID, Name,         │  │
//! │  │  (SQLite     │  │  quantity /      │  │  Quantity, Price         │  │
//! │  │   pool)      │  │  price (text)    │  │                          │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod db;
mod form;
mod table;

pub use db::DbState;
pub use form::{required, FormField, ProductForm};
pub use table::{ProductTable, TableRow, HEADERS};
