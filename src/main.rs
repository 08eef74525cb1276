//! Edge gateway binary.
//!
//! # Architecture Overview
//!
//! ```text
//! Client ─▶ request id ─▶ cors ─▶ trace ─▶ dispatch
//!                                             │
//!            ┌──────────────┬─────────────────┼──────────────┐
//!            ▼              ▼                 ▼              ▼
//!         /health        /api/*               /           other
//!         liveness    upstream proxy ─▶ API   index    static files
//! ```

use std::path::PathBuf;

use clap::Parser;

use edge_gateway::config;
use edge_gateway::net;
use edge_gateway::observability::{logging, metrics};
use edge_gateway::{GatewayServer, Shutdown};

#[derive(Parser)]
#[command(name = "edge-gateway")]
#[command(about = "Static asset server and API reverse proxy for the monitoring UI", long_about = None)]
struct Cli {
    /// TOML configuration file. PORT, HOST, BACKEND_URL and STATIC_DIR
    /// override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    logging::init(&config.observability);
    tracing::info!("edge-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.listener.port,
        upstream = %config.upstream.url,
        timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to install metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = match net::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start: listener bind failed");
            return Err(e.into());
        }
    };

    let server = GatewayServer::new(config)?;
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
