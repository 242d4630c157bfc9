//! # DineLine Backend
//!
//! Serves the order queue over HTTP until Ctrl-C, then shuts the queue actor down.
//!
//! Configuration comes from the environment, see [`dineline::config`].

use anyhow::Context;
use dineline::config::ServiceConfig;
use dineline::lifecycle::{setup_tracing, OrderSystem};
use dineline::server;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env first so RUST_LOG from the file reaches the subscriber
    let config = ServiceConfig::from_env()?;
    setup_tracing();
    config.log();

    let system = OrderSystem::with_config(&config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "DineLine backend ready");

    tokio::select! {
        _ = server::serve(listener, system.order_client.clone()) => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl-C")?;
            info!("Ctrl-C received");
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
