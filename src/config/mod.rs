//! Configuration loading and management
//!
//! Settings come from an optional YAML file, then environment variables
//! override individual values:
//!
//! | Variable | Setting |
//! |---|---|
//! | `INVENTORY_CONFIG` | path of the YAML file to load |
//! | `INVENTORY_HOST` / `INVENTORY_PORT` | bind address |
//! | `INVENTORY_CORS_ORIGINS` | comma-separated allowed origins |
//! | `INVENTORY_STORAGE` | `memory` or `mongodb` |
//! | `MONGODB_URI` / `MONGODB_DATABASE` | MongoDB connection |
//! | `INVENTORY_API_URL` | base URL used by the dashboard client |

use crate::core::error::{ConfigError, InventoryResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_MONGODB_DATABASE: &str = "inventory";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which document store backs the product collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    #[default]
    Memory,
    Mongodb { uri: String, database: String },
}

/// Dashboard client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> InventoryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> InventoryResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `INVENTORY_CONFIG` (or defaults) and apply environment overrides
    pub fn load() -> InventoryResult<Self> {
        let config = match std::env::var("INVENTORY_CONFIG") {
            Ok(path) => {
                tracing::info!(path = %path, "loading configuration file");
                Self::from_yaml_file(&path)?
            }
            Err(_) => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Defaults with environment overrides, ignoring `INVENTORY_CONFIG`
    pub fn from_env() -> InventoryResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> InventoryResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("INVENTORY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INVENTORY_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                key: "INVENTORY_PORT".to_string(),
                message: format!("{}", e),
            })?;
        }
        if let Some(origins) = lookup("INVENTORY_CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(backend) = lookup("INVENTORY_STORAGE") {
            self.storage = match backend.to_ascii_lowercase().as_str() {
                "memory" => StorageConfig::Memory,
                "mongodb" => match self.storage {
                    mongo @ StorageConfig::Mongodb { .. } => mongo,
                    StorageConfig::Memory => StorageConfig::Mongodb {
                        uri: DEFAULT_MONGODB_URI.to_string(),
                        database: DEFAULT_MONGODB_DATABASE.to_string(),
                    },
                },
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "INVENTORY_STORAGE".to_string(),
                        message: format!("unknown backend '{}'", other),
                    }
                    .into());
                }
            };
        }

        if let StorageConfig::Mongodb { uri, database } = &mut self.storage {
            if let Some(value) = lookup("MONGODB_URI") {
                *uri = value;
            }
            if let Some(value) = lookup("MONGODB_DATABASE") {
                *database = value;
            }
        }

        if let Some(url) = lookup("INVENTORY_API_URL") {
            self.client.api_url = url;
        }

        Ok(self)
    }
}
