//! # API Error Type
//!
//! Unified error type for REST handlers.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Error → HTTP Response                          │
//! │                                                                         │
//! │  ErrorKind::Validation ──► 422 { "code": "VALIDATION_ERROR", ... }     │
//! │  ErrorKind::NotFound   ──► 404 { "code": "NOT_FOUND", ... }            │
//! │  ErrorKind::Storage    ──► 500 { "code": "DATABASE_ERROR", ... }       │
//! │                            (detail logged, generic message returned)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventory_core::ErrorKind;
use inventory_db::DbError;
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 12"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (422)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::validation(err.to_string()),
            ErrorKind::NotFound => ApiError::new(ErrorCode::NotFound, err.to_string()),
            ErrorKind::Storage => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Database operation failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::ValidationError;

    #[test]
    fn test_kind_to_status() {
        let err = ApiError::from(DbError::not_found("Product", 3));
        assert_eq!(err.code.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Product not found: 3");

        let err = ApiError::from(DbError::from(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_storage_detail_is_not_leaked() {
        let err = ApiError::from(DbError::QueryFailed("disk I/O error at page 7".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("page 7"));
    }
}
