//! Create/edit form with client-side validation
//!
//! The form holds raw text exactly as typed. [`ProductForm::begin_submit`]
//! validates it, coerces it into a [`NewProduct`] and marks the form as in
//! flight until [`ProductForm::finish_submit`] is called.

use crate::core::{CATEGORIES, NewProduct, Product};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Description,
    Price,
    Stock,
    Category,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::Stock => "stock",
            FormField::Category => "category",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text values as typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl FormValues {
    fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Stock => &self.stock,
            FormField::Category => &self.category,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::Stock => &mut self.stock,
            FormField::Category => &mut self.category,
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, String>;

/// What a successful submit asks the dashboard to do
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    Create(NewProduct),
    Update(Uuid, NewProduct),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InFlight,

    #[error("the form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
}

/// State of the product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    values: FormValues,
    errors: FieldErrors,
    submitting: bool,
    editing: Option<Uuid>,
}

impl ProductForm {
    /// Empty form for creating a product
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing product
    pub fn for_product(product: &Product) -> Self {
        Self {
            values: FormValues {
                name: product.name.clone(),
                description: product.description.clone().unwrap_or_default(),
                price: product.price.to_string(),
                stock: product.stock.to_string(),
                category: product.category.clone(),
            },
            editing: Some(product.id),
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit product"
        } else {
            "New product"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_editing(), self.submitting) {
            (true, true) => "Updating...",
            (true, false) => "Update product",
            (false, true) => "Creating...",
            (false, false) => "Create product",
        }
    }

    /// Categories offered by the picker
    pub fn categories(&self) -> &'static [&'static str] {
        CATEGORIES
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update one field; its pending error is cleared
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Run every rule, replacing the error map. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = check(&self.values);
        self.errors.is_empty()
    }

    /// Validate and coerce the form, marking it in flight
    pub fn begin_submit(&mut self) -> Result<FormIntent, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let product = coerce(&self.values).map_err(SubmitError::Invalid)?;
        self.submitting = true;

        Ok(match self.editing {
            Some(id) => FormIntent::Update(id, product),
            None => FormIntent::Create(product),
        })
    }

    /// Leave the in-flight state, whatever the outcome was
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_stock(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|s| *s >= 0)
}

fn check(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if values.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required".to_string());
    }

    let price = values.price.trim();
    if price.is_empty() {
        errors.insert(FormField::Price, "Price is required".to_string());
    } else if parse_price(price).is_none() {
        errors.insert(
            FormField::Price,
            "Price must be a number greater than 0".to_string(),
        );
    }

    let stock = values.stock.trim();
    if stock.is_empty() {
        errors.insert(FormField::Stock, "Stock is required".to_string());
    } else if parse_stock(stock).is_none() {
        errors.insert(
            FormField::Stock,
            "Stock must be a whole number greater than or equal to 0".to_string(),
        );
    }

    if values.category.trim().is_empty() {
        errors.insert(FormField::Category, "Category is required".to_string());
    }

    errors
}

fn coerce(values: &FormValues) -> Result<NewProduct, FieldErrors> {
    let (Some(price), Some(stock)) = (
        parse_price(values.price.trim()),
        parse_stock(values.stock.trim()),
    ) else {
        return Err(check(values));
    };

    let description = values.description.trim();
    Ok(NewProduct {
        name: values.name.trim().to_string(),
        price,
        description: (!description.is_empty()).then(|| description.to_string()),
        stock,
        category: values.category.trim().to_string(),
    })
}
