//! The product record and its create/update payloads

use crate::core::entity::Entity;
use crate::core::validation::{EntityValidationConfig, ValidatableEntity, filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered by the dashboard form.
///
/// Any non-blank category is accepted by the API; this list only seeds the picker.
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Home",
    "Sports",
    "Books",
    "Food",
    "Health",
    "Other",
];

/// A stored inventory product.
///
/// `id`, `created_at` and `updated_at` are owned by the store adapter; clients
/// never send them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialize a create payload into a record with a fresh id and timestamps
    pub fn from_new(new: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            price: new.price,
            description: new.description.filter(|d| !d.is_empty()),
            stock: new.stock,
            category: new.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields of a patch and refresh `updated_at`.
    ///
    /// An empty description clears it.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = Some(description).filter(|d| !d.is_empty());
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Utc::now();
    }
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl ValidatableEntity for Product {
    /// Server-side product invariants.
    ///
    /// `create` requires name, price, stock and category; `update` checks only
    /// the fields supplied, and rejects an explicit `null` for a required one.
    fn validation_config(operation: &str) -> EntityValidationConfig {
        let creating = operation == "create";
        let mut config = EntityValidationConfig::new(operation);

        for field in ["name", "price", "stock", "category"] {
            config = if creating {
                config.require(field)
            } else {
                config.allow(field)
            };
            config = config.add_validator(field, validators::required());
        }

        config
            .add_filter("name", filters::trim())
            .add_validator("name", validators::string())
            .add_validator("name", validators::not_blank())
            .add_filter("price", filters::round_decimals(2))
            .add_validator("price", validators::number())
            .add_validator("price", validators::positive())
            .allow("description")
            .add_filter("description", filters::trim())
            .add_validator("description", validators::string())
            .add_validator("stock", validators::integer())
            .add_validator("stock", validators::non_negative())
            .add_filter("category", filters::trim())
            .add_validator("category", validators::string())
            .add_validator("category", validators::not_blank())
    }
}

/// Payload for creating a product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stock: i64,
    pub category: String,
}

impl NewProduct {
    /// Convert into a patch that overwrites every field
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name),
            price: Some(self.price),
            description: Some(self.description.unwrap_or_default()),
            stock: Some(self.stock),
            category: Some(self.category),
        }
    }
}

/// Payload for updating a product; absent fields are left untouched
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }
}
