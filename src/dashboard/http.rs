//! reqwest-backed [`ProductApi`]

use super::api::{ApiError, ProductApi, fallback};
use crate::config::ClientConfig;
use crate::core::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for the product API
#[derive(Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: &Uuid) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

/// Turn a response into `T`, preferring the server's `message` on failure
async fn handle<T: DeserializeOwned>(
    result: Result<reqwest::Response, reqwest::Error>,
    fallback: &str,
) -> Result<T, ApiError> {
    let resp = result.map_err(|e| {
        tracing::warn!(error = %e, "product API unreachable");
        ApiError::Network(fallback.to_string())
    })?;

    let status = resp.status();
    if !status.is_success() {
        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Application {
            status: status.as_u16(),
            message,
        });
    }

    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let result = self.client.get(self.products_url()).send().await;
        handle(result, fallback::LIST).await
    }

    async fn get_product(&self, id: &Uuid) -> Result<Product, ApiError> {
        let result = self.client.get(self.product_url(id)).send().await;
        handle(result, fallback::GET).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let result = self
            .client
            .post(self.products_url())
            .json(product)
            .send()
            .await;
        handle(result, fallback::CREATE).await
    }

    async fn update_product(&self, id: &Uuid, patch: &ProductPatch) -> Result<Product, ApiError> {
        let result = self
            .client
            .patch(self.product_url(id))
            .json(patch)
            .send()
            .await;
        handle(result, fallback::UPDATE).await
    }

    async fn delete_product(&self, id: &Uuid) -> Result<Product, ApiError> {
        let result = self.client.delete(self.product_url(id)).send().await;
        handle(result, fallback::DELETE).await
    }
}
