use crate::core::gateway::ApiGatewayProxyRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    PutProduct,
    GetProduct,
    GetProducts,
    DeleteProduct,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::PutProduct => "put_product",
            Operation::GetProduct => "get_product",
            Operation::GetProducts => "get_products",
            Operation::DeleteProduct => "delete_product",
        }
    }

    /// Counter emitted when the operation succeeds.
    pub fn success_metric(&self) -> &'static str {
        match self {
            Operation::PutProduct => "ProductCreated",
            Operation::GetProduct => "ProductFetched",
            Operation::GetProducts => "ProductsListed",
            Operation::DeleteProduct => "ProductDeleted",
        }
    }

    /// Resolves the operation for a request hitting the router function.
    pub fn resolve(request: &ApiGatewayProxyRequest) -> Option<Self> {
        let method = request.method()?.to_ascii_uppercase();
        match (method.as_str(), request.path_id()) {
            ("PUT", _) => Some(Operation::PutProduct),
            ("DELETE", _) => Some(Operation::DeleteProduct),
            ("GET", Some(_)) => Some(Operation::GetProduct),
            ("GET", None) => Some(Operation::GetProducts),
            _ => None,
        }
    }
}

/// How a deployed function picks the operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Fixed(Operation),
    Dispatch,
}

impl Route {
    pub fn operation_for(&self, request: &ApiGatewayProxyRequest) -> Option<Operation> {
        match self {
            Route::Fixed(operation) => Some(*operation),
            Route::Dispatch => Operation::resolve(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_method_and_path_id() {
        let item = |method: &str| ApiGatewayProxyRequest::new(method, "/products/1").with_path_id("1");
        let collection = |method: &str| ApiGatewayProxyRequest::new(method, "/products");

        let cases = [
            (item("PUT"), Some(Operation::PutProduct)),
            (item("get"), Some(Operation::GetProduct)),
            (collection("GET"), Some(Operation::GetProducts)),
            (item("DELETE"), Some(Operation::DeleteProduct)),
            (collection("POST"), None),
            (ApiGatewayProxyRequest::default(), None),
        ];

        for (request, expected) in cases {
            assert_eq!(Operation::resolve(&request), expected);
        }
    }

    #[test]
    fn test_fixed_route_ignores_method() {
        let request = ApiGatewayProxyRequest::new("POST", "/anything");
        let route = Route::Fixed(Operation::GetProducts);
        assert_eq!(route.operation_for(&request), Some(Operation::GetProducts));
    }
}
