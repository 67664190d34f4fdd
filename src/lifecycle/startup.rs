//! Startup orchestration.
//!
//! # Responsibilities
//! - Start metrics exposition when enabled
//! - Build the registry from validated configuration
//! - Bind the debug listener and serve until shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::DebugServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Run the service with an already loaded and validated configuration.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, "Failed to start metrics exporter");
        }
    }

    let registry = Arc::new(config.registry()?);
    metrics::record_registry_size(registry.leaf_count());

    tracing::info!(
        top_level = registry.top_level_names().len(),
        leaves = registry.leaf_count(),
        custom = config.routes.is_some(),
        "Route registry built"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown));

    DebugServer::new(config.server.clone(), registry)
        .run(listener, stop)
        .await?;

    Ok(())
}
