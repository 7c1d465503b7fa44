//! # Product Table
//!
//! Read-only rows shown under the form, one per product, ordered by id.

use inventory_core::Product;

/// One row of the table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl From<&Product> for TableRow {
    fn from(p: &Product) -> Self {
        TableRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            quantity: p.quantity_in_stock.to_string(),
            price: p.price_per_unit.to_string(),
        }
    }
}

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["ID", "Name", "Quantity", "Price"];

/// The table widget's contents.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    rows: Vec<TableRow>,
}

impl ProductTable {
    /// Replaces every row.
    pub fn set_products(&mut self, products: &[Product]) {
        self.rows = products.iter().map(TableRow::from).collect();
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
