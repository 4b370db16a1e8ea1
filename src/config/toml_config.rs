use crate::config::{AppConfig, MetricsConfig, StoreConfig};
use crate::utils::error::{ProductApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk layout:
///
/// ```toml
/// [store]
/// table_name = "Products"
/// region = "eu-west-1"
/// endpoint_url = "http://localhost:8000"
///
/// [metrics]
/// namespace = "ProductApi"
/// enabled = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ProductApiError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl From<TomlConfig> for AppConfig {
    fn from(config: TomlConfig) -> Self {
        Self {
            store: config.store,
            metrics: config.metrics.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(TomlConfig::from_file(path)?.into())
    }
}
