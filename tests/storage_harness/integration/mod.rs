//! Integration test infrastructure for product stores.
//!
//! Validates stores through the full REST layer
//! (HTTP → handler → ProductStore → response).
//!
//! # Architecture
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by build_test_router)
//!         ├─ GET    /health
//!         ├─ POST   /products        → create_product
//!         ├─ GET    /products        → list_products
//!         ├─ GET    /products/{id}   → get_product
//!         ├─ PATCH  /products/{id}   → update_product
//!         └─ DELETE /products/{id}   → delete_product
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use inventory::core::ProductStore;
use inventory::server::ServerBuilder;
use std::sync::Arc;

/// Build the production router around the given store
pub fn build_test_router(store: Arc<dyn ProductStore>) -> Router {
    ServerBuilder::new()
        .with_shared_store(store)
        .build()
        .expect("router should build")
}
