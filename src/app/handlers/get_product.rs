use crate::app::error::ApiError;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use crate::domain::{Product, ProductStore};

/// `GET /products/{id}`
pub async fn get_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    match try_get_product(store, request).await {
        Ok(product) => ApiGatewayProxyResponse::json(200, &product),
        Err(error) => error.into_response(),
    }
}

async fn try_get_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> Result<Product, ApiError> {
    let id = request.path_id().ok_or(ApiError::MissingPathId)?;

    tracing::info!("Fetching product {}", id);
    let product = store
        .get_product(id)
        .await?
        .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;

    tracing::debug!(?product, "Product found");
    Ok(product)
}
