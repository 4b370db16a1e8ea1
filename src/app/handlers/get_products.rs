use crate::app::error::ApiError;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use crate::domain::{Product, ProductStore};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// `GET /products`: first page only, there is no continuation.
pub async fn get_products(
    store: &dyn ProductStore,
    _request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    match store.get_products().await {
        Ok(products) => {
            tracing::info!("Listed {} products", products.len());
            ApiGatewayProxyResponse::json(200, &ProductList { products })
        }
        Err(error) => ApiError::from(error).into_response(),
    }
}
