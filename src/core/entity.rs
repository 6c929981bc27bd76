//! Entity trait defining the metadata every stored record exposes

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for records persisted by a store adapter.
///
/// All entities have:
/// - id: Unique identifier, assigned by the store
/// - created_at: Creation timestamp, assigned by the store
/// - updated_at: Last modification timestamp
///
/// The resource name doubles as the URL segment and the document collection name.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs and collections (e.g., "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Collection path for this entity type (e.g., "/products")
    fn collection_path() -> String {
        format!("/{}", Self::resource_name())
    }

    /// Item path for this entity type, with an axum path parameter (e.g., "/products/{id}")
    fn item_path() -> String {
        format!("/{}/{{id}}", Self::resource_name())
    }
}
