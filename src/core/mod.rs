//! Core module containing the product model, store trait and error types

pub mod entity;
pub mod error;
pub mod product;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use product::{CATEGORIES, NewProduct, Product, ProductPatch};
pub use service::ProductStore;
