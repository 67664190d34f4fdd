//! Route Registry debug service
//!
//! Serves a read-only diagnostic view of the dashboard's route registry.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml ──▶ config::loader ──▶ AppConfig ──▶ Registry (Arc, immutable)
//!                                                        │
//!                     ┌──────────────────────────────────┤
//!                     ▼                                  ▼
//!              routing::resolver                  http::DebugServer
//!        name + args → path | error       GET /routes, /routes/all, /resolve/{name}
//!                     │
//!                     ▼
//!        observability (tracing logs, Prometheus counters)
//! ```

use std::path::PathBuf;

use clap::Parser;

use route_registry::config::{load_config, AppConfig};
use route_registry::lifecycle::startup;
use route_registry::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Debug view of the dashboard route registry", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the debug server bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!("route-registry v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        config_file = ?args.config,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
