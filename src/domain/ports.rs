use crate::domain::model::Product;
use async_trait::async_trait;
use thiserror::Error;

/// Maximum number of products returned by a single listing. There is no
/// continuation token, so anything past the first page is unreachable.
pub const SCAN_PAGE_SIZE: usize = 20;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },

    #[error("Stored item has invalid '{field}': {reason}")]
    MalformedItem { field: String, reason: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// `Ok(None)` when no product has this id.
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Unconditional upsert, last writer wins.
    async fn put_product(&self, product: &Product) -> StoreResult<()>;

    /// Succeeds whether or not the id exists.
    async fn delete_product(&self, id: &str) -> StoreResult<()>;

    /// At most [`SCAN_PAGE_SIZE`] products, in store order.
    async fn get_products(&self) -> StoreResult<Vec<Product>>;
}
