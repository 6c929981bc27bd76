//! Macro-generated test suite for the `ProductStore` contract.
//!
//! The `product_store_tests!` macro generates a test module that validates
//! any `ProductStore` implementation: CRUD operations, ordering, partial
//! updates, not-found handling and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use inventory::storage::InMemoryProductStore;
//!
//! product_store_tests!(InMemoryProductStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_create_assigns_id_and_timestamps`
//! - `test_get_nonexistent`
//! - `test_list_empty`
//! - `test_list_preserves_insertion_order`
//! - `test_update_partial`
//! - `test_update_clears_description`
//! - `test_update_nonexistent`
//! - `test_delete_returns_record`
//! - `test_delete_nonexistent`
//! - `test_concurrent_creates`

/// Generate a full `ProductStore` conformance test suite.
///
/// `$factory` is re-evaluated for each test to ensure isolation. For the
/// concurrent test the store must also be `Clone + 'static`.
#[macro_export]
macro_rules! product_store_tests {
    ($factory:expr) => {
        mod product_store_contract_tests {
            use super::*;
            use inventory::core::error::{EntityError, InventoryError};
            use inventory::core::{ProductPatch, ProductStore};
            use uuid::Uuid;

            #[tokio::test]
            async fn test_create_assigns_id_and_timestamps() {
                let store = $factory;
                let created = store.create(new_product("Mouse", 19.99, 5)).await.unwrap();

                assert_eq!(created.name, "Mouse");
                assert!((created.price - 19.99).abs() < f64::EPSILON);
                assert_eq!(created.stock, 5);
                assert_eq!(created.category, "Electronics");
                assert_eq!(created.description.as_deref(), Some("Mouse description"));
                assert_eq!(created.created_at, created.updated_at);

                let fetched = store.get(&created.id).await.unwrap();
                assert_eq!(fetched, Some(created));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get(&Uuid::new_v4()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_preserves_insertion_order() {
                let store = $factory;
                let mut ids = Vec::new();
                for name in ["A", "B", "C", "D"] {
                    ids.push(store.create(new_product(name, 1.0, 1)).await.unwrap().id);
                }

                let listed: Vec<Uuid> = store.list().await.unwrap().iter().map(|p| p.id).collect();
                assert_eq!(listed, ids);
            }

            #[tokio::test]
            async fn test_update_partial() {
                let store = $factory;
                let created = store.create(new_product("Desk", 150.0, 2)).await.unwrap();

                let updated = store.update(&created.id, stock_patch(9)).await.unwrap();
                assert_eq!(updated.id, created.id);
                assert_eq!(updated.stock, 9);
                assert_eq!(updated.name, "Desk");
                assert_eq!(updated.description, created.description);
                assert_eq!(updated.created_at, created.created_at);
                assert!(updated.updated_at >= created.updated_at);

                let fetched = store.get(&created.id).await.unwrap().unwrap();
                assert_eq!(fetched, updated);
            }

            #[tokio::test]
            async fn test_update_clears_description() {
                let store = $factory;
                let created = store.create(new_product("Lamp", 20.0, 4)).await.unwrap();

                let patch = ProductPatch {
                    description: Some(String::new()),
                    ..Default::default()
                };
                let updated = store.update(&created.id, patch).await.unwrap();
                assert!(updated.description.is_none());
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let err = store.update(&Uuid::new_v4(), stock_patch(1)).await.unwrap_err();
                assert!(matches!(
                    err,
                    InventoryError::Entity(EntityError::NotFound { .. })
                ));
            }

            #[tokio::test]
            async fn test_delete_returns_record() {
                let store = $factory;
                let keep = store.create(new_product("Keep", 1.0, 1)).await.unwrap();
                let gone = store.create(new_product("Gone", 2.0, 2)).await.unwrap();

                let deleted = store.delete(&gone.id).await.unwrap();
                assert_eq!(deleted, gone);
                assert!(store.get(&gone.id).await.unwrap().is_none());

                let remaining = store.list().await.unwrap();
                assert_eq!(remaining, vec![keep]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                let err = store.delete(&Uuid::new_v4()).await.unwrap_err();
                assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_concurrent_creates() {
                let store = $factory;
                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .create(new_product(&format!("P{}", i), 1.0, i))
                            .await
                            .unwrap()
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(store.list().await.unwrap().len(), 10);
            }
        }
    };
}
