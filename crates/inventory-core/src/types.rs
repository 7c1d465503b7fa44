//! # Domain Types
//!
//! Core domain types shared by the Product Store and every adapter.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   NewProduct    │   │   ProductPatch      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (store)     │   │  name           │   │  name: Patch<..>    │   │
//! │  │  name           │   │  quantity       │   │  quantity: Patch<..>│   │
//! │  │  quantity       │   │  price          │   │  price: Patch<..>   │   │
//! │  │  price          │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                        ┌─────────────────┐   ┌─────────────────────┐   │
//! │                        │    Patch<T>     │   │       Page          │   │
//! │                        │  Unset | Set(T) │   │  offset, limit      │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::validation::{
    validate_price, validate_product_name, validate_quantity, ValidationResult,
};

// =============================================================================
// Product
// =============================================================================

/// A persisted product row.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate primary key, never reused after deletion.
    pub id: i64,

    /// Display name, never blank.
    pub name: String,

    /// Units on hand, never negative.
    pub quantity_in_stock: i64,

    /// Price of one unit, never negative.
    pub price_per_unit: f64,
}

// =============================================================================
// New Product
// =============================================================================

/// Input for creating a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity_in_stock: i64,
    pub price_per_unit: f64,
}

impl NewProduct {
    /// Creates a new product input.
    pub fn new(name: impl Into<String>, quantity_in_stock: i64, price_per_unit: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity_in_stock,
            price_per_unit,
        }
    }

    /// Checks every field against the product invariants.
    ///
    /// Fields are checked in declaration order; the first violation wins.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_quantity(self.quantity_in_stock)?;
        validate_price(self.price_per_unit)?;
        Ok(())
    }
}

// =============================================================================
// Patch
// =============================================================================

/// A single field of a partial update.
///
/// ## Semantics
/// ```text
/// Unset     → leave the stored value unchanged
/// Set(v)    → overwrite the stored value with v
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    /// Whether this field carries a new value.
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// Borrows the new value, if any.
    #[inline]
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unset => None,
        }
    }

    /// Converts into `Option`, `None` meaning unset.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unset => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Unset,
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// A partial update to a product. Unset fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPatch {
    pub name: Patch<String>,
    pub quantity_in_stock: Patch<i64>,
    pub price_per_unit: Patch<f64>,
}

impl ProductPatch {
    /// Checks every `Set` field against the same invariants as creation.
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = self.name.as_set() {
            validate_product_name(name)?;
        }
        if let Some(quantity) = self.quantity_in_stock.as_set() {
            validate_quantity(*quantity)?;
        }
        if let Some(price) = self.price_per_unit.as_set() {
            validate_price(*price)?;
        }
        Ok(())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        !self.name.is_set() && !self.quantity_in_stock.is_set() && !self.price_per_unit.is_set()
    }
}

// =============================================================================
// Page
// =============================================================================

/// Skip/take pagination for listing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Rows to skip.
    pub offset: u32,
    /// Maximum rows to return.
    pub limit: u32,
}

impl Page {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 100;

    pub const fn new(offset: u32, limit: u32) -> Self {
        Page { offset, limit }
    }

    /// The page following this one.
    pub const fn next(self) -> Self {
        Page {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(0, Page::DEFAULT_LIMIT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_new_product_validation() {
        assert!(NewProduct::new("Widget", 100, 9.99).validate().is_ok());
        assert!(NewProduct::new("Freebie", 0, 0.0).validate().is_ok());

        assert!(matches!(
            NewProduct::new("", 1, 1.0).validate(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            NewProduct::new("Widget", -1, 1.0).validate(),
            Err(ValidationError::Negative { .. })
        ));
        assert!(NewProduct::new("Widget", 1, -0.5).validate().is_err());
    }

    #[test]
    fn test_patch_from_option() {
        assert_eq!(Patch::from(Some(3)), Patch::Set(3));
        assert_eq!(Patch::<i64>::from(None), Patch::Unset);
        assert_eq!(Patch::Set("x").into_option(), Some("x"));
        assert!(!Patch::<f64>::default().is_set());
    }

    #[test]
    fn test_empty_patch_is_valid() {
        let patch = ProductPatch::default();
        assert!(patch.is_empty());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_patch_validates_only_set_fields() {
        let patch = ProductPatch {
            name: Patch::Set("Renamed".to_string()),
            ..ProductPatch::default()
        };
        assert!(!patch.is_empty());
        assert!(patch.validate().is_ok());

        let patch = ProductPatch {
            price_per_unit: Patch::Set(-1.0),
            ..ProductPatch::default()
        };
        assert_eq!(
            patch.validate(),
            Err(ValidationError::Negative {
                field: "price_per_unit".to_string()
            })
        );

        let patch = ProductPatch {
            name: Patch::Set(String::new()),
            ..ProductPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_page_defaults_and_next() {
        let page = Page::default();
        assert_eq!(page, Page::new(0, 100));
        assert_eq!(page.next(), Page::new(100, 100));
        assert_eq!(Page::new(u32::MAX, 10).next().offset, u32::MAX);
    }

    #[test]
    fn test_product_serializes_with_wire_names() {
        let product = Product {
            id: 7,
            name: "Widget".to_string(),
            quantity_in_stock: 100,
            price_per_unit: 9.99,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["quantity_in_stock"], 100);
        assert_eq!(json["price_per_unit"], 9.99);
    }
}
