//! Binary entry point for the employee directory service.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_directory::api::{AppState, create_router};
use employee_directory::client::UpstreamEmployeeClient;
use employee_directory::config::UpstreamConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = UpstreamConfig::from_env().context("loading upstream configuration")?;
    info!(base_url = %config.base_url, timeout = ?config.timeout, "Configured upstream");

    let client = UpstreamEmployeeClient::new(&config).context("building upstream client")?;
    let router = create_router(AppState::new(client));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router).await.context("serving")?;
    Ok(())
}
