//! DynamoDB-backed [`ProductStore`].
//!
//! One item per product keyed by `id`. Every call is a single request with
//! no conditions, so writes are last-writer-wins and deletes are idempotent.

pub mod conversions;

use crate::config::StoreConfig;
use crate::domain::{Product, ProductStore, StoreError, StoreResult, SCAN_PAGE_SIZE};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use conversions::{item_to_product, product_to_item};
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the client from the default AWS credential chain, applying the
    /// optional region and endpoint overrides.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(
            "DynamoDB client ready for table {} (region: {:?})",
            config.table_name,
            sdk_config.region()
        );

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn unavailable<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    StoreError::Unavailable {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

#[async_trait]
impl ProductStore for DynamoDbStore {
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| unavailable("GetItem", e))?;

        result.item.as_ref().map(item_to_product).transpose()
    }

    async fn put_product(&self, product: &Product) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(product)))
            .send()
            .await
            .map_err(|e| unavailable("PutItem", e))?;

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> StoreResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| unavailable("DeleteItem", e))?;

        Ok(())
    }

    async fn get_products(&self) -> StoreResult<Vec<Product>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(SCAN_PAGE_SIZE as i32)
            .send()
            .await
            .map_err(|e| unavailable("Scan", e))?;

        if result.last_evaluated_key.is_some() {
            tracing::debug!("Scan page truncated at {} products", SCAN_PAGE_SIZE);
        }

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_product)
            .collect()
    }
}
