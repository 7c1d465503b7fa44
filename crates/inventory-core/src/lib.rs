//! # inventory-core: Pure Domain Model for the Inventory System
//!
//! This crate holds the Product entity and every rule the Product Store
//! enforces, as plain data and pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Architecture                             │
//! │                                                                         │
//! │  ┌─────────────┐   ┌─────────────┐   ┌──────────────────────────┐     │
//! │  │  REST API   │   │  SOAP API   │   │  Desktop (form + table)  │     │
//! │  └──────┬──────┘   └──────┬──────┘   └────────────┬─────────────┘     │
//! │         └─────────────────┼───────────────────────┘                    │
//! │                           │                                             │
//! │  ┌────────────────────────▼────────────────────────────────────────┐   │
//! │  │              inventory-db (Product Store, SQLite)                │   │
//! │  └────────────────────────┬────────────────────────────────────────┘   │
//! │                           │ validates with                              │
//! │  ┌────────────────────────▼────────────────────────────────────────┐   │
//! │  │            ★ inventory-core (THIS CRATE) ★                       │   │
//! │  │   types: Product, NewProduct, ProductPatch, Patch<T>, Page       │   │
//! │  │   validation: name / quantity / price rules                      │   │
//! │  │   error: ValidationError, ErrorKind                              │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductPatch, Page)
//! - [`error`] - Validation errors and the adapter-facing error taxonomy
//! - [`validation`] - Invariant checks applied before any write
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{NewProduct, Patch, ProductPatch};
//!
//! let widget = NewProduct::new("Widget", 100, 9.99);
//! assert!(widget.validate().is_ok());
//!
//! // Only the price changes; name and quantity stay as they are.
//! let patch = ProductPatch {
//!     price_per_unit: Patch::Set(22.99),
//!     ..ProductPatch::default()
//! };
//! assert!(patch.validate().is_ok());
//!
//! let bad = ProductPatch {
//!     quantity_in_stock: Patch::Set(-1),
//!     ..ProductPatch::default()
//! };
//! assert!(bad.validate().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Mirrors the width of the `name` column in the original schema.
pub const MAX_NAME_LENGTH: usize = 255;
