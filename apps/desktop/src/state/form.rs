//! # Product Form
//!
//! The four text inputs of the window and the rules for reading them.
//!
//! ## Accepted Input
//! ```text
//! Field        Type      Range          Empty means
//! ─────────    ───────   ────────────   ─────────────────────────────────
//! Product ID   integer   1..=10^9       "Product ID is required"
//! Name         text      (store rules)  "Name is required" / unset
//! Quantity     integer   0..=10^9       "Quantity is required" / unset
//! Price        decimal   0..=10^9       "Price is required" / unset
//! ```
//!
//! Whether empty is an error or "unset" depends on the handler: Create needs
//! every field, Update treats empty fields as unchanged.

use std::fmt;
use std::str::FromStr;

use inventory_core::Product;

use crate::error::{DesktopError, DesktopResult};

/// Upper bound shared by every numeric field.
const MAX_INPUT: i64 = 1_000_000_000;

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Quantity,
    Price,
}

impl FormField {
    /// Label shown next to the input and used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "Product ID",
            FormField::Name => "Name",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(FormField::Id),
            "name" => Ok(FormField::Name),
            "qty" | "quantity" => Ok(FormField::Quantity),
            "price" => Ok(FormField::Price),
            other => Err(DesktopError::input(format!("Unknown field: {}", other))),
        }
    }
}

/// Text contents of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Replaces the text of one input.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Id => self.id = value,
            FormField::Name => self.name = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
        }
    }

    /// Current text of one input.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
        }
    }

    /// Empties every input.
    pub fn clear(&mut self) {
        *self = ProductForm::default();
    }

    /// Shows a product's name, quantity and price (the ID input is left alone).
    pub fn show_product(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.quantity = product.quantity_in_stock.to_string();
        self.price = product.price_per_unit.to_string();
    }

    /// The Product ID, which is always required.
    pub fn product_id(&self) -> DesktopResult<i64> {
        required(FormField::Id, parse_int(FormField::Id, &self.id, 1)?)
    }

    /// The trimmed name, or `None` when the input is blank.
    pub fn name(&self) -> Option<String> {
        let name = self.name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// The quantity, or `None` when the input is blank.
    pub fn quantity(&self) -> DesktopResult<Option<i64>> {
        parse_int(FormField::Quantity, &self.quantity, 0)
    }

    /// The price, or `None` when the input is blank.
    pub fn price(&self) -> DesktopResult<Option<f64>> {
        let text = self.price.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let value: f64 = text
            .parse()
            .map_err(|_| DesktopError::input(format!("{} must be a number", FormField::Price)))?;

        if !(0.0..=MAX_INPUT as f64).contains(&value) {
            return Err(DesktopError::input(format!(
                "{} must be between 0 and {}",
                FormField::Price,
                MAX_INPUT
            )));
        }
        Ok(Some(value))
    }
}

/// Turns an empty optional value into the "{Field} is required" error.
pub fn required<T>(field: FormField, value: Option<T>) -> DesktopResult<T> {
    value.ok_or_else(|| DesktopError::input(format!("{} is required", field)))
}

fn parse_int(field: FormField, text: &str, min: i64) -> DesktopResult<Option<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: i64 = text
        .parse()
        .map_err(|_| DesktopError::input(format!("{} must be a whole number", field)))?;

    if !(min..=MAX_INPUT).contains(&value) {
        return Err(DesktopError::input(format!(
            "{} must be between {} and {}",
            field, min, MAX_INPUT
        )));
    }
    Ok(Some(value))
}
