//! Axum extractor for validated entities
//!
//! This module provides the `Validated<T>` extractor that validates and filters
//! request payloads before they reach handlers.

use super::config::EntityValidationConfig;
use crate::core::error::{InventoryError, InventoryResult, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Trait for entities that support validation
pub trait ValidatableEntity {
    /// Get the validation configuration for a specific operation
    fn validation_config(operation: &str) -> EntityValidationConfig;
}

/// Axum extractor that validates and filters entity data
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_product(
///     Validated(payload, _): Validated<Product>,
/// ) -> InventoryResult<Json<Product>> {
///     // payload is already validated and filtered
/// }
/// ```
pub struct Validated<T>(pub Value, std::marker::PhantomData<T>);

impl<T> Validated<T> {
    /// Create a new validated payload
    pub fn new(payload: Value) -> Self {
        Self(payload, std::marker::PhantomData)
    }

    /// Get the inner payload
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Deserialize the cleaned payload into a typed body
    pub fn parse<P: DeserializeOwned>(self) -> InventoryResult<P> {
        Ok(serde_json::from_value(self.0)?)
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Map an HTTP method to the validation operation it performs
pub fn operation_for_method(method: &str) -> &'static str {
    match method {
        "PUT" | "PATCH" => "update",
        _ => "create",
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableEntity + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let operation = operation_for_method(req.method().as_str());

        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                return Err(InventoryError::Validation(ValidationError::InvalidJson {
                    message: e.body_text(),
                })
                .into_response());
            }
        };

        let config = T::validation_config(operation);

        match config.validate_and_filter(payload) {
            Ok(validated_payload) => Ok(Validated::new(validated_payload)),
            Err(errors) => {
                Err(InventoryError::Validation(ValidationError::FieldErrors(errors))
                    .into_response())
            }
        }
    }
}
