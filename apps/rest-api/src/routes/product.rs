//! # Product Routes
//!
//! CRUD endpoints over the Product Store.
//!
//! ## Endpoints
//! ```text
//! POST   /products              201 + product   | 422 | 500
//! GET    /products?skip=&limit= 200 + [product]        | 500
//! GET    /products/{id}         200 + product   | 404 | 500
//! PUT    /products/{id}         200 + product   | 404 | 422 | 500
//! DELETE /products/{id}         204             | 404 | 500
//! ```
//!
//! Numeric fields on this API are positive-only: a zero or negative
//! quantity/price is rejected here, before the store is called.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use inventory_core::validation::fields;
use inventory_core::{NewProduct, Page, Product, ProductPatch};

// =============================================================================
// DTOs
// =============================================================================

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub quantity_in_stock: i64,
    pub price_per_unit: f64,
}

/// Body of `PUT /products/{id}`. Absent and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub quantity_in_stock: Option<i64>,
    pub price_per_unit: Option<f64>,
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// Product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i64,
    pub price_per_unit: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            quantity_in_stock: p.quantity_in_stock,
            price_per_unit: p.price_per_unit,
        }
    }
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, ApiError> {
        require_positive_quantity(self.quantity_in_stock)?;
        require_positive_price(self.price_per_unit)?;
        Ok(NewProduct::new(self.name, self.quantity_in_stock, self.price_per_unit))
    }
}

impl UpdateProductRequest {
    fn into_patch(self) -> Result<ProductPatch, ApiError> {
        if let Some(quantity) = self.quantity_in_stock {
            require_positive_quantity(quantity)?;
        }
        if let Some(price) = self.price_per_unit {
            require_positive_price(price)?;
        }
        Ok(ProductPatch {
            name: self.name.into(),
            quantity_in_stock: self.quantity_in_stock.into(),
            price_per_unit: self.price_per_unit.into(),
        })
    }
}

fn require_positive_quantity(quantity: i64) -> Result<(), ApiError> {
    if quantity <= 0 {
        return Err(ApiError::validation(format!(
            "{} must be greater than 0",
            fields::QUANTITY
        )));
    }
    Ok(())
}

fn require_positive_price(price: f64) -> Result<(), ApiError> {
    // `!(price > 0.0)` also catches NaN
    if !(price > 0.0) {
        return Err(ApiError::validation(format!(
            "{} must be greater than 0",
            fields::PRICE
        )));
    }
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    debug!(name = %body.name, "create_product");
    let new_product = body.into_new_product()?;
    let product = state.db.products().create(new_product).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// `GET /products?skip=&limit=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let page = Page::new(
        params.skip.unwrap_or(0),
        params.limit.unwrap_or(Page::DEFAULT_LIMIT),
    );
    debug!(offset = page.offset, limit = page.limit, "list_products");

    let products = state.db.products().list(page).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    debug!(id, "get_product");
    let product = state.db.products().get(id).await?;
    Ok(Json(product.into()))
}

/// `PUT /products/{id}`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    debug!(id, "update_product");
    let patch = body.into_patch()?;
    let product = state.db.products().update(id, patch).await?;
    Ok(Json(product.into()))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    debug!(id, "delete_product");
    if state.db.products().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Product", id))
    }
}
