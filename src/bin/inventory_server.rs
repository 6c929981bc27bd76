//! Inventory API server
//!
//! Reads configuration from `INVENTORY_CONFIG` (optional YAML) and the
//! environment, then serves the product API.

use inventory::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!(address = %config.server.bind_address(), "starting inventory server");

    ServerBuilder::from_config(&config)
        .await?
        .serve(&config.server.bind_address())
        .await
}
