use crate::app::error::ApiError;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use crate::domain::{Product, ProductStore};

/// `PUT /products/{id}`: create or replace the product.
pub async fn put_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    match try_put_product(store, request).await {
        Ok(()) => ApiGatewayProxyResponse::message(201, "Product created"),
        Err(error) => error.into_response(),
    }
}

async fn try_put_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> Result<(), ApiError> {
    let id = request.path_id().ok_or(ApiError::MissingPathId)?;
    let product = parse_product(request)?;

    if product.id != id {
        return Err(ApiError::IdMismatch {
            path_id: id.to_string(),
            body_id: product.id,
        });
    }

    let violations = product.validate();
    if !violations.is_empty() {
        return Err(ApiError::InvalidProduct(violations));
    }

    store.put_product(&product).await?;
    tracing::info!(product_id = %product.id, "Product stored");
    Ok(())
}

fn parse_product(request: &ApiGatewayProxyRequest) -> Result<Product, ApiError> {
    let body = request
        .body_text()
        .map_err(|e| ApiError::MalformedBody(e.to_string()))?
        .ok_or(ApiError::EmptyBody)?;
    tracing::debug!("Event body {}", body);

    serde_json::from_str::<Product>(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
