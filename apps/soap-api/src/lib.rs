//! # Inventory SOAP API
//!
//! SOAP 1.1 front end for the Product Store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SOAP API Server                                  │
//! │                                                                         │
//! │  POST /  ──► envelope::parse_request ──► InventoryService::dispatch    │
//! │                      │                           │                      │
//! │                      ▼                           ▼                      │
//! │              Fault (soap:Client)        render_response / Fault        │
//! │                                                                         │
//! │  GET /?wsdl, GET /wsdl ──► wsdl::document                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `SOAP_HOST` - Interface to bind (default: 127.0.0.1)
//! - `SOAP_PORT` - HTTP port (default: 8001)
//! - `SOAP_PUBLIC_URL` - Address advertised in the WSDL
//! - `INVENTORY_DB_PATH` - SQLite file (default: ./inventory.db)

pub mod config;
pub mod envelope;
pub mod fault;
pub mod service;
pub mod wsdl;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use inventory_db::Database;
use tower_http::trace::TraceLayer;
use tracing::warn;

// Re-exports
pub use config::SoapConfig;
pub use fault::{Fault, FaultCode};
pub use service::InventoryService;

use envelope::XML_CONTENT_TYPE;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: InventoryService,
    pub wsdl: Arc<str>,
}

/// Builds the application router.
///
/// `service_url` is the address advertised in the WSDL.
pub fn router(db: Database, service_url: &str) -> Router {
    let state = AppState {
        service: InventoryService::new(db),
        wsdl: Arc::from(wsdl::document(service_url)),
    };

    Router::new()
        .route("/", get(index).post(soap_endpoint))
        .route("/wsdl", get(wsdl_document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /`: one envelope in, one envelope (or fault) out.
///
/// The body is taken as raw bytes so that undecodable input still gets a
/// `soap:Client` fault.
async fn soap_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match envelope::parse_request(&body) {
        Ok(request) => state.service.dispatch(&request).await,
        Err(e) => Err(e.into()),
    };

    match outcome {
        Ok(response) => xml(envelope::render_response(&response)),
        Err(fault) => {
            if fault.code == FaultCode::Client {
                warn!(fault = %fault.message, "Client fault");
            }
            fault.into_response()
        }
    }
}

/// `GET /?wsdl` serves the WSDL; a bare `GET /` points there.
async fn index(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let wants_wsdl = query
        .as_deref()
        .map(|q| {
            q.split('&')
                .any(|pair| pair.split('=').next().is_some_and(|key| key.eq_ignore_ascii_case("wsdl")))
        })
        .unwrap_or(false);

    if wants_wsdl {
        xml(state.wsdl.to_string())
    } else {
        "Inventory SOAP service. WSDL at ?wsdl\n".into_response()
    }
}

/// `GET /wsdl`
async fn wsdl_document(State(state): State<AppState>) -> Response {
    xml(state.wsdl.to_string())
}

fn xml(body: String) -> Response {
    ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}

// =============================================================================
// Unit Tests
// =============================================================================
