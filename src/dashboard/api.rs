//! Client-side contract for talking to the product API

use crate::core::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use uuid::Uuid;

/// Failures the dashboard can observe when calling the API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Application { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Application { status: 404, .. })
    }
}

/// Fallback messages used when the server gives no `message`
pub mod fallback {
    pub const LIST: &str = "Failed to fetch products";
    pub const GET: &str = "Failed to fetch product";
    pub const CREATE: &str = "Failed to create product";
    pub const UPDATE: &str = "Failed to update product";
    pub const DELETE: &str = "Failed to delete product";
}

/// Operations the dashboard performs against the product API
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn get_product(&self, id: &Uuid) -> Result<Product, ApiError>;

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError>;

    async fn update_product(&self, id: &Uuid, patch: &ProductPatch) -> Result<Product, ApiError>;

    /// Delete a product, returning the removed record
    async fn delete_product(&self, id: &Uuid) -> Result<Product, ApiError>;
}
