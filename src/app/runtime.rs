use crate::adapters::DynamoDbStore;
use crate::app::ProductApi;
use crate::config::AppConfig;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, Route};
use crate::utils::logger;
use crate::utils::validation::Validate;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

/// Bootstraps a Lambda function serving `route`.
///
/// Configuration and the DynamoDB client are set up once per execution
/// environment, before the first invocation is polled.
pub async fn serve(route: Route) -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = AppConfig::from_env()?;
    config.validate()?;

    let store = DynamoDbStore::from_config(&config.store).await;
    tracing::info!(
        table = store.table_name(),
        route = ?route,
        "Product API function initialised"
    );

    let api = ProductApi::new(Arc::new(store), config.metrics);
    let api = &api;

    run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            Ok::<ApiGatewayProxyResponse, Error>(api.handle_route(route, &event.payload).await)
        },
    ))
    .await
}
