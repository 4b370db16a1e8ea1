//! Product CRUD API for API Gateway + Lambda, backed by a DynamoDB table.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

#[cfg(feature = "dynamodb")]
pub use adapters::DynamoDbStore;

pub use adapters::InMemoryStore;
pub use app::{ApiError, ProductApi};
pub use config::{AppConfig, MetricsConfig, StoreConfig};
pub use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, Operation, Route};
pub use domain::{Product, ProductStore, StoreError, SCAN_PAGE_SIZE};
pub use utils::error::{ProductApiError, Result};
