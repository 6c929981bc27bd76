//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoProductStore`, a `ProductStore` backed by a
//! `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! inventory-dash = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Products live in a collection named after `Product::resource_name()`
//! ("products"), one document per product.
//!
//! # Serialization strategy
//!
//! Products are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents. UUIDs and timestamps are therefore stored
//! as strings. The `id` field is mapped to MongoDB's `_id` convention.

use crate::core::error::{EntityError, InventoryError, InventoryResult, StorageError};
use crate::core::{Entity, NewProduct, Product, ProductPatch, ProductStore};
use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use uuid::Uuid;

const BACKEND: &str = "mongodb";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn serialization_error(message: impl std::fmt::Display) -> InventoryError {
    InventoryError::Entity(EntityError::SerializationError {
        entity_type: Product::resource_name_singular().to_string(),
        message: message.to_string(),
    })
}

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document,
/// renaming `id` → `_id` for MongoDB convention.
fn json_to_document(json: serde_json::Value) -> InventoryResult<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| serialization_error(format!("JSON to BSON: {}", e)))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(serialization_error("expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value,
/// renaming `_id` → `id` for domain entity convention.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

fn product_to_document(product: &Product) -> InventoryResult<Document> {
    let json = serde_json::to_value(product).map_err(serialization_error)?;
    json_to_document(json)
}

fn document_to_product(doc: Document) -> InventoryResult<Product> {
    serde_json::from_value(document_to_json(doc)).map_err(serialization_error)
}

/// Build the `$set` / `$unset` update for a patch.
///
/// An empty description is removed from the document rather than stored.
fn patch_to_update(patch: ProductPatch) -> InventoryResult<Document> {
    let clear_description = patch.description.as_deref() == Some("");
    let mut patch = patch;
    if clear_description {
        patch.description = None;
    }

    let mut set = json_to_document(serde_json::to_value(&patch).map_err(serialization_error)?)?;
    set.insert("updatedAt", Utc::now().to_rfc3339());

    let mut update = doc! { "$set": set };
    if clear_description {
        update.insert("$unset", doc! { "description": "" });
    }
    Ok(update)
}

// ---------------------------------------------------------------------------
// MongoProductStore
// ---------------------------------------------------------------------------

/// Product store backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use inventory::storage::MongoProductStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoProductStore::new(client.database("inventory"));
/// store.ensure_indexes().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoProductStore {
    database: Database,
}

impl MongoProductStore {
    /// Create a new `MongoProductStore` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect to a MongoDB deployment and select a database.
    pub async fn connect(uri: &str, database: &str) -> InventoryResult<Self> {
        let client = mongodb::Client::with_uri_str(uri).await.map_err(|e| {
            InventoryError::Storage(StorageError::ConnectionError {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            })
        })?;
        tracing::info!(database, "connected to MongoDB");
        Ok(Self::new(client.database(database)))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the MongoDB collection for products.
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(Product::resource_name())
    }

    /// Create an index on `createdAt` so listing stays cheap.
    ///
    /// Idempotent, safe to call on every startup.
    pub async fn ensure_indexes(&self) -> InventoryResult<()> {
        use mongodb::IndexModel;

        self.collection()
            .create_index(IndexModel::builder().keys(doc! { "createdAt": 1 }).build())
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?;

        Ok(())
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn create(&self, product: NewProduct) -> InventoryResult<Product> {
        let product = Product::from_new(product);
        let doc = product_to_document(&product)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?;

        // Read back the inserted product
        let stored = self
            .collection()
            .find_one(doc! { "_id": uuid_bson(&product.id) })
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?
            .ok_or_else(|| InventoryError::product_not_found(product.id))?;

        document_to_product(stored)
    }

    /// List all products, oldest first.
    async fn list(&self) -> InventoryResult<Vec<Product>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?;

        let mut products = docs
            .into_iter()
            .map(document_to_product)
            .collect::<InventoryResult<Vec<_>>>()?;

        // Timestamps are stored as strings; order on the parsed value
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    async fn get(&self, id: &Uuid) -> InventoryResult<Option<Product>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?;

        doc.map(document_to_product).transpose()
    }

    async fn update(&self, id: &Uuid, patch: ProductPatch) -> InventoryResult<Product> {
        let update = patch_to_update(patch)?;

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": uuid_bson(id) }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?
            .ok_or_else(|| InventoryError::product_not_found(*id))?;

        document_to_product(updated)
    }

    async fn delete(&self, id: &Uuid) -> InventoryResult<Product> {
        let deleted = self
            .collection()
            .find_one_and_delete(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| StorageError::query(BACKEND, e))?
            .ok_or_else(|| InventoryError::product_not_found(*id))?;

        document_to_product(deleted)
    }
}
