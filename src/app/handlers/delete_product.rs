use crate::app::error::ApiError;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use crate::domain::ProductStore;

/// `DELETE /products/{id}`. No existence check: deleting an unknown id
/// still answers 200.
pub async fn delete_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    match try_delete_product(store, request).await {
        Ok(()) => ApiGatewayProxyResponse::message(200, "Product deleted"),
        Err(error) => error.into_response(),
    }
}

async fn try_delete_product(
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> Result<(), ApiError> {
    let id = request.path_id().ok_or(ApiError::MissingPathId)?;

    store.delete_product(id).await?;
    tracing::info!(product_id = %id, "Product deleted");
    Ok(())
}
