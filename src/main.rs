use anyhow::Context;
use clap::Parser;
use product_api::utils::{logger, validation::Validate};
use product_api::{CliConfig, DynamoDbStore, ProductApi, Route};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let store = DynamoDbStore::from_config(&config.store).await;
    tracing::info!("Using table {}", store.table_name());

    let api = ProductApi::new(Arc::new(store), config.metrics);
    let request = cli.command.to_request();
    let response = api.handle_route(Route::Dispatch, &request).await;

    let body = response
        .body_json()
        .context("response body is not JSON")?;
    println!("{}", response.status_code);
    println!("{}", serde_json::to_string_pretty(&body)?);

    if response.status_code >= 400 {
        std::process::exit(match response.status_code {
            500..=599 => 3,
            _ => 2,
        });
    }

    Ok(())
}
