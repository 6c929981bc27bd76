//! Shared test harness for product store testing
//!
//! Provides product fixtures and the macros that validate any
//! `ProductStore` implementation, both directly and through the REST layer.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod product_store_tests;

#[macro_use]
pub mod integration;

use inventory::core::{NewProduct, ProductPatch};

/// Build a create payload with the given name, price and stock
pub fn new_product(name: &str, price: f64, stock: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        description: Some(format!("{} description", name)),
        stock,
        category: "Electronics".to_string(),
    }
}

/// A patch that only touches stock
pub fn stock_patch(stock: i64) -> ProductPatch {
    ProductPatch {
        stock: Some(stock),
        ..Default::default()
    }
}
