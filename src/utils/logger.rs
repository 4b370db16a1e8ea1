use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set by Lambda when the function uses advanced logging controls.
const LAMBDA_LOG_LEVEL_VAR: &str = "AWS_LAMBDA_LOG_LEVEL";

/// Filter directive used when `RUST_LOG` is not set.
fn default_directive(verbose: bool, lambda_level: Option<&str>) -> String {
    let level = match lambda_level.map(|level| level.trim().to_ascii_lowercase()) {
        Some(level) if matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") => {
            level
        }
        Some(level) if level == "fatal" => "error".to_string(),
        _ if verbose => "debug".to_string(),
        _ => "info".to_string(),
    };

    // Dependencies (SDK, hyper) stay at warn unless RUST_LOG says otherwise.
    format!("warn,product_api={}", level)
}

fn env_filter(default: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable output on stderr, so stdout carries only the response.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive(verbose, None)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One JSON object per line; CloudWatch adds its own timestamp. The
/// invocation span (operation, request id) is attached to every event.
pub fn init_lambda_logger() {
    let lambda_level = std::env::var(LAMBDA_LOG_LEVEL_VAR).ok();

    tracing_subscriber::registry()
        .with(env_filter(default_directive(false, lambda_level.as_deref())))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();
}
