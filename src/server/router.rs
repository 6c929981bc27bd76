//! Router builder utilities for product and health routes

use super::handlers::{
    ProductAppState, create_product, delete_product, get_product, list_products, update_product,
};
use crate::core::{Entity, Product};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build product CRUD routes:
/// - GET    /products        - List all products
/// - POST   /products        - Create a product
/// - GET    /products/{id}   - Get a product
/// - PATCH  /products/{id}   - Update supplied fields of a product
/// - DELETE /products/{id}   - Delete a product, returning it
pub fn build_product_routes(state: ProductAppState) -> Router {
    Router::new()
        .route(
            &Product::collection_path(),
            get(list_products).post(create_product),
        )
        .route(
            &Product::item_path(),
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "inventory-dash"
    }))
}
