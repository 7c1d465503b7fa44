//! # Product Store
//!
//! The sole owner of product state. Every write from every front end goes
//! through here.
//!
//! ## Key Operations
//! - `create` / `get` / `find` / `list` / `update` / `delete`
//! - `count` for diagnostics and the seed binary
//!
//! ## One Call, One Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Anatomy of a Write                                   │
//! │                                                                         │
//! │  update(id, patch)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  patch.validate()  ── invalid? ──► DbError::Validation (nothing written)│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │  UPDATE products SET … WHERE id = ? RETURNING …  ← takes write lock    │
//! │       │                                                                 │
//! │       ├── no row? ──► ROLLBACK ──► DbError::NotFound                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT ──► updated Product                                            │
//! │                                                                         │
//! │  The write statement is the first statement of the transaction, so     │
//! │  the existence check and the modification happen under the same lock:  │
//! │  a concurrent delete lands strictly before or strictly after.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{NewProduct, Page, Product, ProductPatch};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Product";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let store = ProductStore::new(pool);
///
/// let widget = store.create(NewProduct::new("Widget", 100, 9.99)).await?;
/// let page = store.list(Page::new(0, 20)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    /// Creates a new ProductStore.
    pub fn new(pool: SqlitePool) -> Self {
        ProductStore { pool }
    }

    /// Creates a product and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The persisted row, including the new id
    /// * `Err(DbError::Validation)` - Blank name, negative quantity or price
    pub async fn create(&self, new_product: NewProduct) -> DbResult<Product> {
        new_product
            .validate()
            .inspect_err(|e| warn!(field = e.field(), error = %e, "Rejected new product"))?;

        debug!(name = %new_product.name, "Creating product");

        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity_in_stock, price_per_unit)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, quantity_in_stock, price_per_unit
            "#,
        )
        .bind(&new_product.name)
        .bind(new_product.quantity_in_stock)
        .bind(new_product.price_per_unit)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id = product.id, "Product created");
        Ok(product)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn get(&self, id: i64) -> DbResult<Product> {
        self.find(id)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Looks up a product by its id, treating absence as a normal outcome.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Reading product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity_in_stock, price_per_unit
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists products in ascending id order.
    ///
    /// An offset past the last row yields an empty list, not an error.
    pub async fn list(&self, page: Page) -> DbResult<Vec<Product>> {
        debug!(offset = page.offset, limit = page.limit, "Listing products");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity_in_stock, price_per_unit
            FROM products
            ORDER BY id ASC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "List returned products");
        Ok(products)
    }

    /// Applies a partial update.
    ///
    /// ## Semantics
    /// - `Patch::Unset` fields keep their stored values
    /// - `Patch::Set` fields are validated like `create` before anything is written
    /// - A patch with nothing set writes nothing and returns the current row
    ///
    /// ## Returns
    /// * `Ok(Product)` - The row after the update
    /// * `Err(DbError::Validation)` - A set field violates an invariant
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn update(&self, id: i64, patch: ProductPatch) -> DbResult<Product> {
        patch
            .validate()
            .inspect_err(|e| warn!(id, field = e.field(), error = %e, "Rejected product update"))?;

        if patch.is_empty() {
            debug!(id, "Empty patch, returning current row");
            return self.get(id).await;
        }

        debug!(
            id,
            name = patch.name.is_set(),
            quantity = patch.quantity_in_stock.is_set(),
            price = patch.price_per_unit.is_set(),
            "Updating product"
        );

        let mut tx = self.pool.begin().await?;

        // NULL binds mean "keep the current value"
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = COALESCE(?2, name),
                quantity_in_stock = COALESCE(?3, quantity_in_stock),
                price_per_unit = COALESCE(?4, price_per_unit)
            WHERE id = ?1
            RETURNING id, name, quantity_in_stock, price_per_unit
            "#,
        )
        .bind(id)
        .bind(patch.name.into_option())
        .bind(patch.quantity_in_stock.into_option())
        .bind(patch.price_per_unit.into_option())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(product) = updated else {
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionFailed(e.to_string()))?;
            return Err(DbError::not_found(ENTITY, id));
        };

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, "Product updated");
        Ok(product)
    }

    /// Permanently removes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - The row existed and is gone
    /// * `Ok(false)` - There was no such row (not an error)
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(id, "Product deleted");
        }
        Ok(deleted)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use inventory_core::{ErrorKind, Patch, ValidationError};
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    async fn store() -> ProductStore {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    async fn file_database(max_connections: u32) -> (Database, PathBuf) {
        let path = std::env::temp_dir().join(format!("inventory-test-{}.db", uuid::Uuid::new_v4()));
        let db = Database::new(DbConfig::new(&path).max_connections(max_connections))
            .await
            .unwrap();
        (db, path)
    }

    fn remove_database_files(path: &Path) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let store = store().await;

        let a = store.create(NewProduct::new("A", 1, 1.0)).await.unwrap();
        let b = store.create(NewProduct::new("B", 2, 2.0)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(b.name, "B");
        assert_eq!(b.quantity_in_stock, 2);
        assert_eq!(b.price_per_unit, 2.0);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store().await;

        let first = store.create(NewProduct::new("Temp", 1, 1.0)).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store.create(NewProduct::new("Next", 1, 1.0)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_read_returns_created_product() {
        let store = store().await;

        let created = store.create(NewProduct::new("Widget", 100, 9.99)).await.unwrap();
        let read = store.get(created.id).await.unwrap();

        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let store = store().await;

        let err = store.create(NewProduct::new("", 1, 1.0)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = store.create(NewProduct::new("Widget", -1, 1.0)).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Negative { .. })
        ));

        let err = store.create(NewProduct::new("Widget", 1, -1.0)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = store().await;

        let err = store.get(999).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Product not found: 999");
        assert!(store.find(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_paginates_in_id_order() {
        let store = store().await;
        for name in ["One", "Two", "Three"] {
            store.create(NewProduct::new(name, 1, 1.0)).await.unwrap();
        }

        let page = store.list(Page::new(0, 2)).await.unwrap();
        let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["One", "Two"]);
        assert!(page[0].id < page[1].id);

        let rest = store.list(Page::new(2, 2)).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Three");

        assert!(store.list(Page::new(10, 2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_set_fields() {
        let store = store().await;
        let created = store.create(NewProduct::new("Old", 5, 3.5)).await.unwrap();

        let patch = ProductPatch {
            name: Patch::Set("New".to_string()),
            ..ProductPatch::default()
        };
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(updated.quantity_in_stock, 5);
        assert_eq!(updated.price_per_unit, 3.5);
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_empty_patch_returns_current_row() {
        let store = store().await;
        let created = store.create(NewProduct::new("Same", 5, 3.5)).await.unwrap();

        let updated = store.update(created.id, ProductPatch::default()).await.unwrap();
        assert_eq!(updated, created);

        let err = store.update(created.id + 1, ProductPatch::default()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_row_unchanged() {
        let store = store().await;
        let created = store.create(NewProduct::new("Stable", 5, 3.5)).await.unwrap();

        for patch in [
            ProductPatch {
                quantity_in_stock: Patch::Set(-1),
                ..ProductPatch::default()
            },
            ProductPatch {
                name: Patch::Set("Changed".to_string()),
                price_per_unit: Patch::Set(-1.0),
                ..ProductPatch::default()
            },
            ProductPatch {
                name: Patch::Set("  ".to_string()),
                ..ProductPatch::default()
            },
        ] {
            let err = store.update(created.id, patch).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }

        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = store().await;

        let patch = ProductPatch {
            quantity_in_stock: Patch::Set(1),
            ..ProductPatch::default()
        };
        let err = store.update(42, patch).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_validation_precedes_existence_check() {
        let store = store().await;

        let patch = ProductPatch {
            quantity_in_stock: Patch::Set(-5),
            ..ProductPatch::default()
        };
        let err = store.update(42, patch).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_delete_semantics() {
        let store = store().await;
        let created = store.create(NewProduct::new("Doomed", 1, 1.0)).await.unwrap();

        assert!(!store.delete(created.id + 100).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);

        assert!(store.delete(created.id).await.unwrap());
        assert_eq!(store.get(created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        assert!(!store.delete(created.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let store = store().await;

        let widget = store.create(NewProduct::new("Widget", 100, 9.99)).await.unwrap();

        let patch = ProductPatch {
            price_per_unit: Patch::Set(22.99),
            ..ProductPatch::default()
        };
        let repriced = store.update(widget.id, patch).await.unwrap();
        assert_eq!(repriced.quantity_in_stock, 100);
        assert_eq!(repriced.price_per_unit, 22.99);

        assert!(store.delete(widget.id).await.unwrap());
        assert_eq!(store.get(widget.id).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_check_constraints_back_up_validation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Bypass the store to hit the table directly
        let err = sqlx::query(
            "INSERT INTO products (name, quantity_in_stock, price_per_unit) VALUES ('X', -1, 1.0)",
        )
        .execute(db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_storage_failure() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.products();
        db.close().await;

        let err = store.create(NewProduct::new("Late", 1, 1.0)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let (db, path) = file_database(4).await;

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = db.products();
                tokio::spawn(async move {
                    store
                        .create(NewProduct::new(format!("Item {i}"), i, 1.0))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 20);

        db.close().await;
        remove_database_files(&path);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_and_delete_do_not_interleave() {
        let (db, path) = file_database(4).await;
        let target = db
            .products()
            .create(NewProduct::new("Contested", 10, 1.0))
            .await
            .unwrap();
        let id = target.id;

        let updates: Vec<_> = (0..8)
            .map(|i| {
                let store = db.products();
                tokio::spawn(async move {
                    let patch = ProductPatch {
                        quantity_in_stock: Patch::Set(i),
                        ..ProductPatch::default()
                    };
                    store.update(id, patch).await
                })
            })
            .collect();
        let deletes: Vec<_> = (0..4)
            .map(|_| {
                let store = db.products();
                tokio::spawn(async move { store.delete(id).await.unwrap() })
            })
            .collect();

        for handle in updates {
            match handle.await.unwrap() {
                Ok(product) => {
                    assert_eq!(product.id, id);
                    assert_eq!(product.name, "Contested");
                }
                Err(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            }
        }

        let mut removed = 0;
        for handle in deletes {
            if handle.await.unwrap() {
                removed += 1;
            }
        }
        assert_eq!(removed, 1);
        assert!(db.products().find(id).await.unwrap().is_none());

        db.close().await;
        remove_database_files(&path);
    }
}
