//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  ├── ValidationError  - Invariant violations on input                  │
//! │  └── ErrorKind        - Validation | NotFound | Storage                │
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - Wraps ValidationError, adds NotFound + storage │
//! │                                                                         │
//! │  Adapters                                                               │
//! │  ├── REST    ErrorKind → 422 / 404 / 500                               │
//! │  ├── SOAP    ErrorKind → soap:Client / soap:Client / soap:Server       │
//! │  └── Desktop ErrorKind → message on the status line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any persisted mutation; a request that fails validation
/// never touches the database.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// The three outcomes a caller must be able to tell apart.
///
/// ## Why Three Kinds?
/// A client deciding whether to retry needs to know whether its input was
/// invalid, whether the resource is missing, or whether the system failed.
/// Every adapter maps these onto its own idiom without merging them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input violated an invariant. Never retried, never partially applied.
    Validation,
    /// The requested id does not exist.
    NotFound,
    /// The durable backend failed or rejected the transaction.
    Storage,
}

impl ErrorKind {
    /// Whether the caller is at fault (as opposed to the server).
    pub fn is_client_error(self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::NotFound)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
