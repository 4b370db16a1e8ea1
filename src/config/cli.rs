use crate::config::{AppConfig, MetricsConfig, StoreConfig};
use crate::core::ApiGatewayProxyRequest;
use crate::utils::error::{ProductApiError, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-api")]
#[command(about = "Run product API operations against a DynamoDB table")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file with [store] and [metrics] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Falls back to the config file, then TABLE_NAME")]
    pub table_name: Option<String>,

    #[arg(long, help = "Falls back to the config file, then AWS_REGION")]
    pub region: Option<String>,

    #[arg(
        long,
        help = "e.g. http://localhost:8000 for DynamoDB Local; falls back to the config file, then DYNAMODB_ENDPOINT_URL"
    )]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Emit EMF metric lines to stdout")]
    pub metrics: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List up to one page of products
    List,
    /// Fetch a single product
    Get { id: String },
    /// Create or replace a product
    Put {
        id: String,
        #[arg(long, help = "Product JSON, e.g. '{\"id\":\"42\",\"name\":\"Widget\",\"price\":9.99}'")]
        body: String,
    },
    /// Delete a product
    Delete { id: String },
}

impl Command {
    pub fn to_request(&self) -> ApiGatewayProxyRequest {
        match self {
            Command::List => ApiGatewayProxyRequest::new("GET", "/products"),
            Command::Get { id } => {
                ApiGatewayProxyRequest::new("GET", &format!("/products/{}", id)).with_path_id(id)
            }
            Command::Put { id, body } => {
                ApiGatewayProxyRequest::new("PUT", &format!("/products/{}", id))
                    .with_path_id(id)
                    .with_body(body)
            }
            Command::Delete { id } => {
                ApiGatewayProxyRequest::new("DELETE", &format!("/products/{}", id)).with_path_id(id)
            }
        }
    }
}

impl CliConfig {
    /// Flags first, then the config file, then the environment.
    pub fn resolve(&self) -> Result<AppConfig> {
        self.resolve_with(|key| env::var(key).ok())
    }

    pub fn resolve_with<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match &self.config {
            Some(path) => Some(AppConfig::from_toml_file(path)?),
            None => None,
        };
        let file_store = config.as_ref().map(|c| &c.store);
        let from_env = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let table_name = self
            .table_name
            .clone()
            .or_else(|| file_store.map(|s| s.table_name.clone()))
            .or_else(|| from_env("TABLE_NAME"))
            .ok_or_else(|| ProductApiError::MissingConfigError {
                field: "table_name".to_string(),
            })?;
        let region = self
            .region
            .clone()
            .or_else(|| file_store.and_then(|s| s.region.clone()))
            .or_else(|| from_env("AWS_REGION"));
        let endpoint_url = self
            .endpoint_url
            .clone()
            .or_else(|| file_store.and_then(|s| s.endpoint_url.clone()))
            .or_else(|| from_env("DYNAMODB_ENDPOINT_URL"));

        let mut metrics = config
            .map(|c| c.metrics)
            .unwrap_or_else(|| MetricsConfig {
                enabled: false,
                ..MetricsConfig::default()
            });
        if self.metrics {
            metrics.enabled = true;
        }

        Ok(AppConfig {
            store: StoreConfig {
                table_name,
                region,
                endpoint_url,
            },
            metrics,
        })
    }
}
