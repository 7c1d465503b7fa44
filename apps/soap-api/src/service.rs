//! # Inventory Service
//!
//! The four SOAP operations, dispatched by the local name of the Body element.
//!
//! ```text
//! CreateProduct(name, quantity_in_stock, price_per_unit) → Product
//! GetProduct(product_id)                                 → Product
//! UpdateProduct(product_id, name?, quantity_in_stock?,
//!               price_per_unit?)                         → Product
//! DeleteProduct(product_id)                              → "Product {id} deleted successfully"
//! ```

use std::str::FromStr;

use inventory_core::{ErrorKind, NewProduct, Patch, ProductPatch};
use inventory_db::Database;
use tracing::debug;

use crate::envelope::{Param, SoapRequest, SoapResponse, SoapResult};
use crate::fault::Fault;

/// Operation names, as they appear in envelopes and the WSDL.
pub const OPERATIONS: [&str; 4] = ["CreateProduct", "GetProduct", "UpdateProduct", "DeleteProduct"];

/// SOAP front end over the Product Store.
#[derive(Debug, Clone)]
pub struct InventoryService {
    db: Database,
}

impl InventoryService {
    pub fn new(db: Database) -> Self {
        InventoryService { db }
    }

    /// Runs the requested operation.
    pub async fn dispatch(&self, request: &SoapRequest) -> Result<SoapResponse, Fault> {
        debug!(operation = %request.operation, "SOAP request");

        let result = match request.operation.as_str() {
            "CreateProduct" => self.create_product(request).await?,
            "GetProduct" => self.get_product(request).await?,
            "UpdateProduct" => self.update_product(request).await?,
            "DeleteProduct" => self.delete_product(request).await?,
            other => return Err(Fault::client(format!("Unknown operation: {}", other))),
        };

        Ok(SoapResponse {
            operation: request.operation.clone(),
            result,
        })
    }

    async fn create_product(&self, request: &SoapRequest) -> Result<SoapResult, Fault> {
        let new_product = NewProduct::new(
            required_text(request, "name")?,
            required_parsed::<i64>(request, "quantity_in_stock")?,
            required_parsed::<f64>(request, "price_per_unit")?,
        );

        let product = self.db.products().create(new_product).await?;
        Ok(SoapResult::Product(product))
    }

    async fn get_product(&self, request: &SoapRequest) -> Result<SoapResult, Fault> {
        let id = required_parsed::<i64>(request, "product_id")?;

        match self.db.products().find(id).await? {
            Some(product) => Ok(SoapResult::Product(product)),
            None => Err(Fault::product_not_found(id)),
        }
    }

    async fn update_product(&self, request: &SoapRequest) -> Result<SoapResult, Fault> {
        let id = required_parsed::<i64>(request, "product_id")?;
        let patch = ProductPatch {
            name: optional_text(request, "name"),
            quantity_in_stock: optional_parsed(request, "quantity_in_stock")?,
            price_per_unit: optional_parsed(request, "price_per_unit")?,
        };

        match self.db.products().update(id, patch).await {
            Ok(product) => Ok(SoapResult::Product(product)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Fault::product_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_product(&self, request: &SoapRequest) -> Result<SoapResult, Fault> {
        let id = required_parsed::<i64>(request, "product_id")?;

        if self.db.products().delete(id).await? {
            Ok(SoapResult::Message(format!("Product {} deleted successfully", id)))
        } else {
            Err(Fault::product_not_found(id))
        }
    }
}

// =============================================================================
// Parameter Extraction
// =============================================================================

fn required_text(request: &SoapRequest, name: &str) -> Result<String, Fault> {
    match request.param(name) {
        Some(Param::Value(value)) => Ok(value.clone()),
        Some(Param::Nil) | None => Err(Fault::client(format!("Missing required parameter: {}", name))),
    }
}

fn required_parsed<T: FromStr>(request: &SoapRequest, name: &str) -> Result<T, Fault> {
    parse_value(name, &required_text(request, name)?)
}

fn optional_text(request: &SoapRequest, name: &str) -> Patch<String> {
    match request.param(name) {
        Some(Param::Value(value)) => Patch::Set(value.clone()),
        Some(Param::Nil) | None => Patch::Unset,
    }
}

fn optional_parsed<T: FromStr>(request: &SoapRequest, name: &str) -> Result<Patch<T>, Fault> {
    match optional_text(request, name) {
        Patch::Set(raw) => Ok(Patch::Set(parse_value(name, &raw)?)),
        Patch::Unset => Ok(Patch::Unset),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, Fault> {
    raw.trim()
        .parse()
        .map_err(|_| Fault::client(format!("Invalid value for {}: '{}'", name, raw.trim())))
}
