//! Store adapter trait for product persistence

use crate::core::error::InventoryResult;
use crate::core::product::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use uuid::Uuid;

/// Store adapter translating CRUD operations into document-store calls.
///
/// Implementations own no state beyond a handle to their collection and perform
/// no validation: whatever the API layer hands in is persisted as-is. Backend
/// failures surface unmodified as `InventoryError::Storage`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product, assigning its id and timestamps
    async fn create(&self, product: NewProduct) -> InventoryResult<Product>;

    /// List all products in store order (insertion order)
    async fn list(&self) -> InventoryResult<Vec<Product>>;

    /// Get a product by ID
    async fn get(&self, id: &Uuid) -> InventoryResult<Option<Product>>;

    /// Apply the supplied fields to an existing product.
    ///
    /// Returns `EntityError::NotFound` if no product has this id.
    async fn update(&self, id: &Uuid, patch: ProductPatch) -> InventoryResult<Product>;

    /// Remove a product and return the removed record.
    ///
    /// Returns `EntityError::NotFound` if no product has this id.
    async fn delete(&self, id: &Uuid) -> InventoryResult<Product>;
}
