//! # Inventory Dash
//!
//! A product inventory service and its management dashboard.
//!
//! ## Features
//!
//! - **Product REST API**: create, list, fetch, partially update and delete products
//! - **Server-side validation**: declarative filters and validators on every write
//! - **Pluggable storage**: in-memory store or MongoDB (`mongodb_backend` feature)
//! - **Typed errors**: every failure maps to a status code and a JSON `{code, message}` body
//! - **Dashboard client**: pure reducer, form validation and list rendering over a
//!   `ProductApi`, with a reqwest implementation behind the `client` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inventory::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load()?;
//!     ServerBuilder::from_config(&config)
//!         .await?
//!         .serve(&config.server.bind_address())
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CATEGORIES, Entity, InventoryError, InventoryResult, NewProduct, Product, ProductPatch,
        ProductStore,
        validation::{EntityValidationConfig, ValidatableEntity, Validated},
    };

    // === Storage ===
    pub use crate::storage::InMemoryProductStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoProductStore;

    // === Config ===
    pub use crate::config::{AppConfig, ClientConfig, ServerConfig, StorageConfig};

    // === Server ===
    pub use crate::server::{ProductAppState, ServerBuilder, build_product_routes, health_routes};

    // === Dashboard ===
    #[cfg(feature = "client")]
    pub use crate::dashboard::HttpProductApi;
    pub use crate::dashboard::{
        ApiError, Confirm, DashboardController, DashboardState, FormField, ListIntent, ListView,
        ProductApi, ProductForm,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, patch, post},
    };
}
