//! Validation and filtering system
//!
//! A declarative approach to validating and filtering entity payloads before
//! they reach the handlers, so that the persistence boundary only ever sees
//! records that satisfy the product invariants.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use config::EntityValidationConfig;
pub use extractor::{ValidatableEntity, Validated};
