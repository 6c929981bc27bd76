//! HTTP exposure of the product store

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::ProductAppState;
pub use router::{build_product_routes, health_routes};
