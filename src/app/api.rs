use crate::app::handlers;
use crate::config::MetricsConfig;
use crate::core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, Operation, Route};
use crate::domain::ProductStore;
use crate::utils::metrics::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Handlers plus their cross-cutting concerns: a span per invocation,
/// a completion log line and EMF counters.
///
/// The store is built once per execution environment and shared by every
/// invocation; nothing else survives between requests.
#[derive(Clone)]
pub struct ProductApi {
    store: Arc<dyn ProductStore>,
    metrics: MetricsConfig,
}

impl ProductApi {
    pub fn new(store: Arc<dyn ProductStore>, metrics: MetricsConfig) -> Self {
        Self { store, metrics }
    }

    pub async fn handle(
        &self,
        operation: Operation,
        request: &ApiGatewayProxyRequest,
    ) -> ApiGatewayProxyResponse {
        let span = tracing::info_span!(
            "product_api",
            operation = operation.name(),
            request_id = request.request_id().unwrap_or("-")
        );

        async {
            let started = Instant::now();
            let response = handlers::dispatch(operation, self.store.as_ref(), request).await;

            tracing::info!(
                status = response.status_code,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Request completed"
            );
            self.record(operation, response.status_code);
            response
        }
        .instrument(span)
        .await
    }

    pub async fn handle_route(
        &self,
        route: Route,
        request: &ApiGatewayProxyRequest,
    ) -> ApiGatewayProxyResponse {
        match route.operation_for(request) {
            Some(operation) => self.handle(operation, request).await,
            None => {
                tracing::warn!(
                    method = request.method().unwrap_or("-"),
                    path = request.path.as_deref().unwrap_or("-"),
                    "No operation for request"
                );
                ApiGatewayProxyResponse::message(405, "Method not allowed")
            }
        }
    }

    fn record(&self, operation: Operation, status_code: u16) {
        let mut metrics = Metrics::new(&self.metrics);
        match status_code {
            200..=299 => metrics.add_count(operation.success_metric(), 1.0),
            400..=499 => metrics.add_count("ClientError", 1.0),
            _ => metrics.add_count("ServerError", 1.0),
        }
        metrics.flush();
    }
}
