//! # SOAP Faults
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Error → SOAP Fault                             │
//! │                                                                         │
//! │  ErrorKind::Validation ──► soap:Client  (message verbatim)             │
//! │  ErrorKind::NotFound   ──► soap:Client  "Product ID {id} not found"    │
//! │  ErrorKind::Storage    ──► soap:Server  (detail logged, generic text)  │
//! │  Bad envelope / op     ──► soap:Client                                 │
//! │                                                                         │
//! │  Every fault goes out with HTTP 500 (SOAP 1.1 §6.2).                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use inventory_db::DbError;

use crate::envelope::{self, EnvelopeError, XML_CONTENT_TYPE};

/// Which side of the exchange is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// The request was wrong; resending it unchanged will fail again
    Client,

    /// The service failed to process a valid request
    Server,
}

impl FaultCode {
    /// Qualified name used in `<faultcode>`.
    pub fn as_qname(self) -> &'static str {
        match self {
            FaultCode::Client => "soap:Client",
            FaultCode::Server => "soap:Server",
        }
    }
}

/// A SOAP 1.1 fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}: {}", .code.as_qname(), .message)]
pub struct Fault {
    pub code: FaultCode,
    pub message: String,
}

impl Fault {
    pub fn client(message: impl Into<String>) -> Self {
        Fault {
            code: FaultCode::Client,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Fault {
            code: FaultCode::Server,
            message: message.into(),
        }
    }

    /// The fault every operation reports for a missing product.
    pub fn product_not_found(id: i64) -> Self {
        Fault::client(format!("Product ID {} not found", id))
    }
}

impl From<DbError> for Fault {
    fn from(err: DbError) -> Self {
        if err.kind().is_client_error() {
            return Fault::client(err.to_string());
        }

        tracing::error!(error = %err, "Database operation failed");
        Fault::server("Database operation failed")
    }
}

impl From<EnvelopeError> for Fault {
    fn from(err: EnvelopeError) -> Self {
        Fault::client(err.to_string())
    }
}

impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
            envelope::render_fault(&self),
        )
            .into_response()
    }
}
