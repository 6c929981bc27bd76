//! Per-operation validation configuration

use crate::core::error::FieldValidationError;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

type Validator = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type Filter = Arc<dyn Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync>;

#[derive(Default, Clone)]
struct FieldRules {
    required: bool,
    filters: Vec<Filter>,
    validators: Vec<Validator>,
}

/// Validation and filtering rules for one entity operation ("create", "update").
///
/// Only configured fields survive `validate_and_filter`; everything else in the
/// payload (ids, timestamps, unknown keys) is dropped. Filters run before
/// validators, in registration order.
#[derive(Clone)]
pub struct EntityValidationConfig {
    operation: String,
    fields: IndexMap<String, FieldRules>,
}

impl EntityValidationConfig {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Declare a field that must be present in the payload
    pub fn require(mut self, field: &str) -> Self {
        self.fields.entry(field.to_string()).or_default().required = true;
        self
    }

    /// Declare a field that may be omitted
    pub fn allow(mut self, field: &str) -> Self {
        self.fields.entry(field.to_string()).or_default();
        self
    }

    pub fn add_validator<V>(mut self, field: &str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.fields
            .entry(field.to_string())
            .or_default()
            .validators
            .push(Arc::new(validator));
        self
    }

    pub fn add_filter<F>(mut self, field: &str, filter: F) -> Self
    where
        F: Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.fields
            .entry(field.to_string())
            .or_default()
            .filters
            .push(Arc::new(filter));
        self
    }

    /// Filter then validate a JSON payload.
    ///
    /// Returns the cleaned object, or every field error found (at most one per field).
    pub fn validate_and_filter(
        &self,
        payload: Value,
    ) -> Result<Value, Vec<FieldValidationError>> {
        let Value::Object(mut input) = payload else {
            return Err(vec![FieldValidationError::new(
                "body",
                "expected a JSON object",
            )]);
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for (field, rules) in &self.fields {
            let Some(mut value) = input.remove(field) else {
                if rules.required {
                    errors.push(FieldValidationError::new(
                        field,
                        format!("'{}' is required", field),
                    ));
                }
                continue;
            };

            let mut filter_failed = false;
            for filter in &rules.filters {
                match filter(field, value.clone()) {
                    Ok(filtered) => value = filtered,
                    Err(e) => {
                        errors.push(FieldValidationError::new(field, e.to_string()));
                        filter_failed = true;
                        break;
                    }
                }
            }
            if filter_failed {
                continue;
            }

            if let Some(message) = rules
                .validators
                .iter()
                .find_map(|validator| validator(field, &value).err())
            {
                errors.push(FieldValidationError::new(field, message));
                continue;
            }

            output.insert(field.clone(), value);
        }

        if !input.is_empty() {
            tracing::debug!(
                operation = %self.operation,
                dropped = ?input.keys().collect::<Vec<_>>(),
                "dropping unknown fields from payload"
            );
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(errors)
        }
    }
}
