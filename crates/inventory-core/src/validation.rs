//! # Validation Module
//!
//! Invariant checks for product fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Adapter (REST / SOAP / Desktop)                              │
//! │  ├── Wire format checks (JSON types, XML numbers, form input)          │
//! │  └── Adapter-specific rules (REST: positive-only numbers)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product Store                                                │
//! │  └── THIS MODULE: invariants, checked before any write                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK constraints mirroring the invariants                        │
//! │                                                                         │
//! │  Defense in depth: the CHECK constraints never replace Layer 2         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_quantity(0).is_ok());
//! assert!(validate_price(-0.01).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field names as they appear on the wire and in error messages.
pub mod fields {
    pub const NAME: &str = "name";
    pub const QUANTITY: &str = "quantity_in_stock";
    pub const PRICE: &str = "price_per_unit";
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most [`MAX_NAME_LENGTH`] characters
///
/// The name is checked trimmed but stored as given.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Widget").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: fields::NAME.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: fields::NAME.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: fields::QUANTITY.to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (NaN compares false against everything,
///   so it is rejected explicitly)
/// - Must be non-negative (>= 0); zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_price;
///
/// assert!(validate_price(9.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: fields::PRICE.to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: fields::PRICE.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name(" padded ").is_ok());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());

        assert_eq!(
            validate_product_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_product_name(" \t ").is_err());
        assert!(matches!(
            validate_product_name(&"A".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { max: 255, .. })
        ));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_product_name(&name).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(22.99).is_ok());

        assert!(matches!(
            validate_price(-1.0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_price(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_price(f64::NAN).is_err());
    }
}
