pub mod gateway;
pub mod routing;

pub use gateway::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
pub use routing::{Operation, Route};
