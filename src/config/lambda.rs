use crate::config::{AppConfig, MetricsConfig, StoreConfig};
use crate::utils::error::{ProductApiError, Result};
use std::env;

impl AppConfig {
    /// Reads the function configuration from the Lambda environment.
    ///
    /// `TABLE_NAME` is required. `AWS_REGION`, `DYNAMODB_ENDPOINT_URL`,
    /// `POWERTOOLS_METRICS_NAMESPACE`, `POWERTOOLS_SERVICE_NAME` and
    /// `METRICS_ENABLED` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let table_name = non_empty("TABLE_NAME").ok_or_else(|| ProductApiError::MissingConfigError {
            field: "TABLE_NAME".to_string(),
        })?;

        let defaults = MetricsConfig::default();
        let enabled = match non_empty("METRICS_ENABLED") {
            Some(value) => parse_bool("METRICS_ENABLED", &value)?,
            None => defaults.enabled,
        };

        Ok(Self {
            store: StoreConfig {
                table_name,
                region: non_empty("AWS_REGION"),
                endpoint_url: non_empty("DYNAMODB_ENDPOINT_URL"),
            },
            metrics: MetricsConfig {
                namespace: non_empty("POWERTOOLS_METRICS_NAMESPACE").unwrap_or(defaults.namespace),
                service_name: non_empty("POWERTOOLS_SERVICE_NAME").unwrap_or(defaults.service_name),
                enabled,
            },
        })
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ProductApiError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}
