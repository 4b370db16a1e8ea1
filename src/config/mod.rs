#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_table_name, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_METRICS_NAMESPACE: &str = "ProductApi";
pub const DEFAULT_SERVICE_NAME: &str = "product-api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub table_name: String,
    #[serde(default)]
    pub region: Option<String>,
    /// Overrides the DynamoDB endpoint, e.g. DynamoDB Local.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            service_name: default_service_name(),
            enabled: default_enabled(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_METRICS_NAMESPACE.to_string()
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_table_name("table_name", &self.store.table_name)?;

        if let Some(region) = &self.store.region {
            validate_aws_region("region", region)?;
        }

        if let Some(endpoint_url) = &self.store.endpoint_url {
            validate_url("endpoint_url", endpoint_url)?;
        }

        validate_non_empty_string("metrics.namespace", &self.metrics.namespace)?;
        validate_non_empty_string("metrics.service_name", &self.metrics.service_name)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProductApiError;

    fn config(table_name: &str) -> AppConfig {
        AppConfig {
            store: StoreConfig {
                table_name: table_name.to_string(),
                region: Some("eu-west-1".to_string()),
                endpoint_url: Some("http://localhost:8000".to_string()),
            },
            metrics: MetricsConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config("Products").validate().is_ok());
    }

    #[test]
    fn test_invalid_table_name_names_the_field() {
        match config("no spaces allowed").validate() {
            Err(ProductApiError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "table_name")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let mut config = config("Products");
        config.store.endpoint_url = Some("localhost:8000".to_string());
        assert!(config.validate().is_err());
    }
}
