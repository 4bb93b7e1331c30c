//! Payroll engine HTTP server.
//!
//! Environment:
//!   PAYROLL_CONFIG_DIR  directory holding `policy.yaml` (built-in standard policy when unset)
//!   PAYROLL_BIND_ADDR   listen address (default `0.0.0.0:3000`)
//!   RUST_LOG            log filter (default `info`)

use std::env;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match env::var("PAYROLL_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir).inspect_err(|err| {
            error!(config_dir = %dir, error = %err, "Failed to load payroll policy");
        })?,
        Err(_) => ConfigLoader::standard(),
    };
    info!(
        policy = %config.policy().name,
        version = %config.policy().version,
        "Payroll policy loaded"
    );

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let router = create_router(AppState::in_memory(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .inspect_err(|err| error!(bind_addr = %bind_addr, error = %err, "Failed to bind"))?;
    info!(bind_addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
