//! # Product Window
//!
//! Presentation model of the product manager: a form, a table, a status line,
//! and one handler per button.
//!
//! ## Handler Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Button → Handler → Status                            │
//! │                                                                         │
//! │  Create  ──► on_create      ──► "Created product with id N"  + refresh │
//! │  Read    ──► on_read        ──► "Product loaded" | "Product not found" │
//! │  Update  ──► on_update      ──► "Product updated" + refresh            │
//! │                                 | "Product not found"                   │
//! │  Delete  ──► on_delete      ──► "Product deleted" + refresh            │
//! │                                 | "Product not found"                   │
//! │  Refresh ──► load_products  ──► "Loaded N products"                    │
//! │  Clear   ──► clear_inputs                                              │
//! │  Row     ──► on_table_click ──► row copied into the form               │
//! │                                                                         │
//! │  Any failure ──► "Error: <message>", form left as typed                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{ErrorKind, NewProduct, Page, Product, ProductPatch};
use tracing::{debug, warn};

use crate::error::{DesktopError, DesktopResult};
use crate::state::{required, DbState, FormField, ProductForm, ProductTable};

/// The product manager window.
#[derive(Debug)]
pub struct ProductWindow {
    db: DbState,
    pub form: ProductForm,
    pub table: ProductTable,
    status: String,
}

impl ProductWindow {
    /// Opens the window and fills the table.
    pub async fn open(db: DbState) -> Self {
        let mut window = ProductWindow {
            db,
            form: ProductForm::default(),
            table: ProductTable::default(),
            status: String::new(),
        };
        window.load_products().await;
        window
    }

    /// Text of the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    fn show_error(&mut self, err: DesktopError) {
        warn!(error = %err, "Handler failed");
        self.set_status(format!("Error: {}", err));
    }

    /// Empties every form input.
    pub fn clear_inputs(&mut self) {
        self.form.clear();
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    pub async fn on_create(&mut self) {
        match self.create().await {
            Ok(product) => {
                self.set_status(format!("Created product with id {}", product.id));
                self.refresh_table().await;
            }
            Err(e) => self.show_error(e),
        }
    }

    pub async fn on_read(&mut self) {
        match self.read().await {
            Ok(Some(product)) => {
                self.form.show_product(&product);
                self.set_status("Product loaded");
            }
            Ok(None) => self.set_status("Product not found"),
            Err(e) => self.show_error(e),
        }
    }

    pub async fn on_update(&mut self) {
        match self.update().await {
            Ok(Some(_)) => {
                self.set_status("Product updated");
                self.refresh_table().await;
            }
            Ok(None) => self.set_status("Product not found"),
            Err(e) => self.show_error(e),
        }
    }

    pub async fn on_delete(&mut self) {
        match self.delete().await {
            Ok(true) => {
                self.set_status("Product deleted");
                self.refresh_table().await;
            }
            Ok(false) => self.set_status("Product not found"),
            Err(e) => self.show_error(e),
        }
    }

    /// Reloads every row and reports how many there are.
    pub async fn load_products(&mut self) {
        match self.fetch_all().await {
            Ok(products) => {
                self.table.set_products(&products);
                self.set_status(format!("Loaded {} products", products.len()));
            }
            Err(e) => self.show_error(e),
        }
    }

    /// Copies the clicked row (0-based) into the form.
    pub fn on_table_click(&mut self, row: usize) {
        let Some(selected) = self.table.row(row).cloned() else {
            self.show_error(DesktopError::input(format!("Row {} does not exist", row + 1)));
            return;
        };

        self.form.set(FormField::Id, selected.id);
        self.form.set(FormField::Name, selected.name);
        self.form.set(FormField::Quantity, selected.quantity);
        self.form.set(FormField::Price, selected.price);
    }

    // =========================================================================
    // Store Calls
    // =========================================================================

    async fn create(&self) -> DesktopResult<Product> {
        let name = required(FormField::Name, self.form.name())?;
        let quantity = required(FormField::Quantity, self.form.quantity()?)?;
        let price = required(FormField::Price, self.form.price()?)?;

        debug!(%name, quantity, price, "Creating product");
        Ok(self.db.products().create(NewProduct::new(name, quantity, price)).await?)
    }

    async fn read(&self) -> DesktopResult<Option<Product>> {
        let id = self.form.product_id()?;
        Ok(self.db.products().find(id).await?)
    }

    /// `Ok(None)` when the id does not exist.
    async fn update(&self) -> DesktopResult<Option<Product>> {
        let id = self.form.product_id()?;
        let patch = ProductPatch {
            name: self.form.name().into(),
            quantity_in_stock: self.form.quantity()?.into(),
            price_per_unit: self.form.price()?.into(),
        };
        debug!(
            id,
            name = patch.name.is_set(),
            quantity = patch.quantity_in_stock.is_set(),
            price = patch.price_per_unit.is_set(),
            "Updating product"
        );

        match self.db.products().update(id, patch).await {
            Ok(product) => Ok(Some(product)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self) -> DesktopResult<bool> {
        let id = self.form.product_id()?;
        Ok(self.db.products().delete(id).await?)
    }

    /// Every product, fetched one page at a time.
    async fn fetch_all(&self) -> DesktopResult<Vec<Product>> {
        let store = self.db.products();
        let mut products = Vec::new();
        let mut page = Page::default();

        loop {
            let batch = store.list(page).await?;
            let done = batch.len() < page.limit as usize;
            products.extend(batch);
            if done {
                break;
            }
            page = page.next();
        }

        Ok(products)
    }

    /// Reloads rows without touching the status line.
    async fn refresh_table(&mut self) {
        match self.fetch_all().await {
            Ok(products) => self.table.set_products(&products),
            Err(e) => self.show_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_db::{Database, DbConfig};

    async fn window() -> ProductWindow {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ProductWindow::open(DbState::new(db)).await
    }

    fn fill(window: &mut ProductWindow, id: &str, name: &str, quantity: &str, price: &str) {
        window.form.set(FormField::Id, id);
        window.form.set(FormField::Name, name);
        window.form.set(FormField::Quantity, quantity);
        window.form.set(FormField::Price, price);
    }

    #[tokio::test]
    async fn test_open_loads_table() {
        let window = window().await;
        assert_eq!(window.status(), "Loaded 0 products");
        assert!(window.table.is_empty());
    }

    #[tokio::test]
    async fn test_create_read_update_delete() {
        let mut window = window().await;

        fill(&mut window, "", "Widget", "100", "9.99");
        window.on_create().await;
        assert_eq!(window.status(), "Created product with id 1");
        assert_eq!(window.table.len(), 1);

        window.clear_inputs();
        window.form.set(FormField::Id, "1");
        window.on_read().await;
        assert_eq!(window.status(), "Product loaded");
        assert_eq!(window.form.name, "Widget");
        assert_eq!(window.form.quantity, "100");
        assert_eq!(window.form.price, "9.99");

        fill(&mut window, "1", "", "", "22.99");
        window.on_update().await;
        assert_eq!(window.status(), "Product updated");
        let row = window.table.row(0).unwrap();
        assert_eq!(row.name, "Widget");
        assert_eq!(row.quantity, "100");
        assert_eq!(row.price, "22.99");

        window.on_delete().await;
        assert_eq!(window.status(), "Product deleted");
        assert!(window.table.is_empty());

        window.on_read().await;
        assert_eq!(window.status(), "Product not found");
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let mut window = window().await;
        fill(&mut window, "77", "Ghost", "", "");

        window.on_update().await;
        assert_eq!(window.status(), "Product not found");

        window.on_delete().await;
        assert_eq!(window.status(), "Product not found");
    }

    #[tokio::test]
    async fn test_errors_leave_form_untouched() {
        let mut window = window().await;

        fill(&mut window, "", "Widget", "", "9.99");
        window.on_create().await;
        assert_eq!(window.status(), "Error: Quantity is required");
        assert_eq!(window.form.name, "Widget");
        assert_eq!(window.form.price, "9.99");

        fill(&mut window, "", "   ", "1", "1");
        window.on_create().await;
        assert_eq!(window.status(), "Error: Name is required");

        fill(&mut window, "", "Widget", "5", "abc");
        window.on_create().await;
        assert_eq!(window.status(), "Error: Price must be a number");
        assert_eq!(window.form.price, "abc");

        window.form.set(FormField::Id, "");
        window.on_read().await;
        assert_eq!(window.status(), "Error: Product ID is required");

        assert!(window.table.is_empty());
    }

    #[tokio::test]
    async fn test_store_errors_are_shown() {
        let mut window = window().await;
        let too_long = "x".repeat(300);
        fill(&mut window, "", &too_long, "1", "1");

        window.on_create().await;
        assert_eq!(window.status(), "Error: name must be at most 255 characters");
    }

    #[tokio::test]
    async fn test_load_products_pages_through_everything() {
        let mut window = window().await;
        let store = window.db.products();
        for i in 0..(Page::DEFAULT_LIMIT + 5) {
            store
                .create(NewProduct::new(format!("Item {}", i), i as i64, 1.0))
                .await
                .unwrap();
        }

        window.load_products().await;
        assert_eq!(window.status(), format!("Loaded {} products", Page::DEFAULT_LIMIT + 5));
        assert_eq!(window.table.len(), (Page::DEFAULT_LIMIT + 5) as usize);
    }

    #[tokio::test]
    async fn test_table_click_fills_form() {
        let mut window = window().await;
        fill(&mut window, "", "Widget", "100", "9.99");
        window.on_create().await;
        window.clear_inputs();

        window.on_table_click(0);
        assert_eq!(window.form.id, "1");
        assert_eq!(window.form.name, "Widget");
        assert_eq!(window.form.quantity, "100");
        assert_eq!(window.form.price, "9.99");

        window.on_table_click(5);
        assert_eq!(window.status(), "Error: Row 6 does not exist");
        assert_eq!(window.form.id, "1");
    }
}
