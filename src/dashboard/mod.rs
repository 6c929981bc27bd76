//! Inventory dashboard client
//!
//! A headless version of the management UI: a pure reducer over
//! [`DashboardState`], a [`DashboardController`] that talks to the API through
//! [`ProductApi`], the [`ProductForm`] and a renderable [`ListView`].

pub mod api;
pub mod controller;
pub mod form;
#[cfg(feature = "client")]
pub mod http;
pub mod list_view;
pub mod state;

pub use api::{ApiError, ProductApi};
pub use controller::{Confirm, DELETE_PROMPT, DashboardController};
pub use form::{FormField, FormIntent, ProductForm, SubmitError};
#[cfg(feature = "client")]
pub use http::HttpProductApi;
pub use list_view::{ListIntent, ListStats, ListView, ProductRow, ProductTable, StockLevel};
pub use state::{Action, DashboardState};
