//! # Inventory REST API
//!
//! JSON over HTTP in front of the Product Store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        REST API Server                                  │
//! │                                                                         │
//! │  Client ───► axum Router ───► routes::product ───► ProductStore        │
//! │                  │                    │                  │              │
//! │             TraceLayer           ApiError ◄──────── DbError            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `REST_HOST` - Interface to bind (default: 127.0.0.1)
//! - `REST_PORT` - HTTP port (default: 8000)
//! - `INVENTORY_DB_PATH` - SQLite file (default: ./inventory.db)
//! - `INVENTORY_DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `INVENTORY_DB_BUSY_TIMEOUT_MS` - Lock wait (default: 5000)

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;
use inventory_db::Database;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::RestConfig;
pub use error::{ApiError, ErrorCode};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the application router.
pub fn router(db: Database) -> Router {
    use routes::product::*;

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { db })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use inventory_db::DbConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (router(db.clone()), db)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (app, _db) = test_app().await;

        let (status, created) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 100, "price_per_unit": 9.99})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Widget");
        assert_eq!(created["quantity_in_stock"], 100);
        assert_eq!(created["price_per_unit"], 9.99);

        let id = created["id"].as_i64().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/products/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_numbers() {
        let (app, db) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 0, "price_per_unit": 9.99})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 5, "price_per_unit": -1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (app, _db) = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "   ", "quantity_in_stock": 1, "price_per_unit": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "name is required");
    }

    #[tokio::test]
    async fn test_get_missing_returns_404() {
        let (app, _db) = test_app().await;

        let (status, body) = send(&app, "GET", "/products/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let (app, _db) = test_app().await;

        for i in 1..=5 {
            send(
                &app,
                "POST",
                "/products",
                Some(json!({"name": format!("Item {}", i), "quantity_in_stock": i, "price_per_unit": 1.5})),
            )
            .await;
        }

        let (status, all) = send(&app, "GET", "/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 5);

        let (_, page) = send(&app, "GET", "/products?skip=1&limit=2", None).await;
        let names: Vec<&str> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Item 2", "Item 3"]);

        let (_, empty) = send(&app, "GET", "/products?skip=10", None).await;
        assert!(empty.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update() {
        let (app, _db) = test_app().await;

        let (_, created) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 100, "price_per_unit": 9.99})),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/products/{}", id),
            Some(json!({"price_per_unit": 22.99})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Widget");
        assert_eq!(updated["quantity_in_stock"], 100);
        assert_eq!(updated["price_per_unit"], 22.99);
    }

    #[tokio::test]
    async fn test_update_missing_and_invalid() {
        let (app, _db) = test_app().await;

        let (status, _) = send(&app, "PUT", "/products/42", Some(json!({"name": "Ghost"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, created) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 3, "price_per_unit": 2.0})),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/products/{}", id),
            Some(json!({"quantity_in_stock": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, unchanged) = send(&app, "GET", &format!("/products/{}", id), None).await;
        assert_eq!(unchanged["quantity_in_stock"], 3);
    }

    #[tokio::test]
    async fn test_delete() {
        let (app, _db) = test_app().await;

        let (_, created) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"name": "Widget", "quantity_in_stock": 1, "price_per_unit": 1.0})),
        )
        .await;
        let uri = format!("/products/{}", created["id"].as_i64().unwrap());

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, db) = test_app().await;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        db.close().await;
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let (app, db) = test_app().await;
        db.close().await;

        let (status, body) = send(&app, "GET", "/products/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
        assert_eq!(body["message"], "Database operation failed");
    }
}
