//! # Repository Module
//!
//! Store implementations over the SQLite pool.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Adapter (REST handler, SOAP operation, desktop button)                │
//! │       │                                                                 │
//! │       │  db.products().update(id, patch)                               │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── create(&self, new_product)                                        │
//! │  ├── get(&self, id) / find(&self, id)                                  │
//! │  ├── list(&self, page)                                                 │
//! │  ├── update(&self, id, patch)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  validate, then one transaction per call                       │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`ProductStore`](product::ProductStore) - Product CRUD and listing

pub mod product;
