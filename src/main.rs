//! Crudgate demo server.
//!
//! Entry point: loads configuration, initializes logging, and serves the
//! demo router.

use tracing_subscriber::{EnvFilter, fmt};

use crudgate_core::error::AppError;
use crudgate_server::app::build_router;
use crudgate_server::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("CRUDGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Bind and serve the demo router.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting crudgate demo server v{}", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, build_router())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}
