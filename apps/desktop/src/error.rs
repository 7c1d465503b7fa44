//! # Desktop Error Type
//!
//! Everything a window handler can fail with. The `Display` text is what
//! lands on the status line (after `Error: `).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form field won't parse ─► DesktopError::Input   "Quantity is required" │
//! │  Store rejects/fails    ─► DesktopError::Store   "name is required"     │
//! │  Startup problems       ─► DataDir / Io          (process exits)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_db::DbError;

/// Desktop application error.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A form field or command line could not be understood
    #[error("{0}")]
    Input(String),

    /// The Product Store returned an error
    #[error(transparent)]
    Store(#[from] DbError),

    /// No platform data directory could be determined
    #[error("Could not determine app data directory")]
    DataDir,

    /// Terminal or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesktopError {
    pub fn input(message: impl Into<String>) -> Self {
        DesktopError::Input(message.into())
    }
}

/// Result type for desktop operations.
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::ValidationError;

    #[test]
    fn test_messages_are_shown_verbatim() {
        assert_eq!(
            DesktopError::input("Price is required").to_string(),
            "Price is required"
        );

        let err = DesktopError::from(DbError::from(ValidationError::Negative {
            field: "price_per_unit".to_string(),
        }));
        assert_eq!(err.to_string(), "price_per_unit cannot be negative");
    }
}
