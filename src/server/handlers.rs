//! Product HTTP handlers
//!
//! Each handler maps 1:1 to a store adapter operation and only marshals the
//! request and response.

use crate::core::error::{InventoryError, InventoryResult, ValidationError};
use crate::core::validation::Validated;
use crate::core::{NewProduct, Product, ProductPatch, ProductStore};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

/// Product-specific AppState
#[derive(Clone)]
pub struct ProductAppState {
    pub store: Arc<dyn ProductStore>,
}

impl ProductAppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

fn parse_id(id: &str) -> InventoryResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        ValidationError::InvalidId {
            value: id.to_string(),
        }
        .into()
    })
}

/// GET /products
pub async fn list_products(
    State(state): State<ProductAppState>,
) -> InventoryResult<Json<Vec<Product>>> {
    let products = state.store.list().await?;
    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> InventoryResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| InventoryError::product_not_found(id))?;
    Ok(Json(product))
}

/// POST /products
pub async fn create_product(
    State(state): State<ProductAppState>,
    payload: Validated<Product>,
) -> InventoryResult<(StatusCode, Json<Product>)> {
    let new: NewProduct = payload.parse()?;
    let product = state.store.create(new).await?;
    tracing::info!(id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /products/{id}
pub async fn update_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    payload: Validated<Product>,
) -> InventoryResult<Json<Product>> {
    let id = parse_id(&id)?;
    let patch: ProductPatch = payload.parse()?;
    let product = state.store.update(&id, patch).await?;
    tracing::info!(id = %product.id, "product updated");
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> InventoryResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.store.delete(&id).await?;
    tracing::info!(id = %product.id, "product deleted");
    Ok(Json(product))
}
