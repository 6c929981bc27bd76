//! In-memory implementation of ProductStore for testing and development

use crate::core::error::{InventoryError, InventoryResult, StorageError};
use crate::core::{NewProduct, Product, ProductPatch, ProductStore};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory product store
///
/// Useful for testing and development. Uses RwLock for thread-safe access and
/// an `IndexMap` so listing returns products in insertion order. Clones share
/// the same underlying collection.
#[derive(Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<IndexMap<Uuid, Product>>>,
}

impl InMemoryProductStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-populated with existing records
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.products.write() {
            map.extend(products.into_iter().map(|p| (p.id, p)));
        }
        store
    }

    fn read(&self) -> InventoryResult<RwLockReadGuard<'_, IndexMap<Uuid, Product>>> {
        self.products.read().map_err(|e| {
            tracing::error!("Failed to acquire read lock: {}", e);
            InventoryError::Storage(StorageError::Unavailable {
                backend: "memory".to_string(),
            })
        })
    }

    fn write(&self) -> InventoryResult<RwLockWriteGuard<'_, IndexMap<Uuid, Product>>> {
        self.products.write().map_err(|e| {
            tracing::error!("Failed to acquire write lock: {}", e);
            InventoryError::Storage(StorageError::Unavailable {
                backend: "memory".to_string(),
            })
        })
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, product: NewProduct) -> InventoryResult<Product> {
        let product = Product::from_new(product);
        self.write()?.insert(product.id, product.clone());
        Ok(product)
    }

    async fn list(&self) -> InventoryResult<Vec<Product>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn get(&self, id: &Uuid) -> InventoryResult<Option<Product>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update(&self, id: &Uuid, patch: ProductPatch) -> InventoryResult<Product> {
        let mut products = self.write()?;
        let product = products
            .get_mut(id)
            .ok_or_else(|| InventoryError::product_not_found(*id))?;

        product.apply(patch);

        Ok(product.clone())
    }

    async fn delete(&self, id: &Uuid) -> InventoryResult<Product> {
        // shift_remove keeps the remaining products in insertion order
        self.write()?
            .shift_remove(id)
            .ok_or_else(|| InventoryError::product_not_found(*id))
    }
}
