//! ServerBuilder for fluent API to build the HTTP server

use super::handlers::ProductAppState;
use super::router::{build_product_routes, health_routes};
use crate::config::{AppConfig, StorageConfig};
use crate::core::ProductStore;
use crate::storage::InMemoryProductStore;
use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryProductStore::new())
///     .with_cors_origins(vec!["http://localhost:5173".to_string()])
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn ProductStore>>,
    cors_origins: Vec<String>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            cors_origins: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Build a server from configuration, connecting the configured store
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let builder = Self::new().with_cors_origins(config.server.cors_origins.clone());

        match &config.storage {
            StorageConfig::Memory => {
                tracing::info!("using in-memory product store");
                Ok(builder.with_store(InMemoryProductStore::new()))
            }
            #[cfg(feature = "mongodb_backend")]
            StorageConfig::Mongodb { uri, database } => {
                let store = crate::storage::MongoProductStore::connect(uri, database).await?;
                store.ensure_indexes().await?;
                Ok(builder.with_store(store))
            }
            #[cfg(not(feature = "mongodb_backend"))]
            StorageConfig::Mongodb { .. } => Err(anyhow::anyhow!(
                "{}; rebuild with the `mongodb_backend` feature",
                crate::core::error::StorageError::Unavailable {
                    backend: "mongodb".to_string()
                }
            )),
        }
    }

    /// Set the product store (required)
    pub fn with_store(mut self, store: impl ProductStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared product store
    pub fn with_shared_store(mut self, store: Arc<dyn ProductStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Restrict CORS to these origins (empty allows any origin)
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    fn cors_layer(&self) -> Result<CorsLayer> {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        if self.cors_origins.is_empty() {
            return Ok(layer.allow_origin(Any));
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|o| HeaderValue::from_str(o))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        Ok(layer.allow_origin(AllowOrigin::list(origins)))
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Product CRUD routes
    /// - Health check routes
    /// - Any custom routes
    ///
    /// wrapped in request tracing and CORS layers.
    pub fn build(mut self) -> Result<Router> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("ProductStore is required. Call .with_store()"))?;

        let cors = self.cors_layer()?;

        let mut app = health_routes().merge(build_product_routes(ProductAppState::new(store)));
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
    }

    /// Build the router and serve it on `addr` until the process stops
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(address = %listener.local_addr()?, "inventory server listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
