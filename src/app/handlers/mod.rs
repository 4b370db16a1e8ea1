//! One handler per API operation: validate, make a single store call, format.

pub mod delete_product;
pub mod get_product;
pub mod get_products;
pub mod put_product;

pub use delete_product::delete_product;
pub use get_product::get_product;
pub use get_products::get_products;
pub use put_product::put_product;

use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, Operation};
use crate::domain::ProductStore;

pub async fn dispatch(
    operation: Operation,
    store: &dyn ProductStore,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    match operation {
        Operation::PutProduct => put_product(store, request).await,
        Operation::GetProduct => get_product(store, request).await,
        Operation::GetProducts => get_products(store, request).await,
        Operation::DeleteProduct => delete_product(store, request).await,
    }
}
