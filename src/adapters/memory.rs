use crate::domain::{Product, ProductStore, StoreResult, SCAN_PAGE_SIZE};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store with the same semantics as the DynamoDB adapter.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: RwLock::new(products),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn put_product(&self, product: &Product) -> StoreResult<()> {
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> StoreResult<()> {
        self.products.write().await.remove(id);
        Ok(())
    }

    async fn get_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .take(SCAN_PAGE_SIZE)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_in_place() {
        let store = InMemoryStore::new();
        store.put_product(&Product::new("1", "Old", 1.0)).await.unwrap();
        store.put_product(&Product::new("1", "New", 2.0)).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get_product("1").await.unwrap(),
            Some(Product::new("1", "New", 2.0))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let store = InMemoryStore::new();
        assert!(store.delete_product("nope").await.is_ok());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_listing_is_capped_at_one_page() {
        let store = InMemoryStore::with_products(
            (0..25).map(|i| Product::new(format!("p{:02}", i), "Item", i as f64)),
        );

        assert_eq!(store.get_products().await.unwrap().len(), SCAN_PAGE_SIZE);
    }
}
