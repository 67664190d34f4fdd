//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_resolutions_total` (counter): resolutions by outcome
//!   (`ok`, `unknown_route`, `path_too_deep`, `incomplete_route`,
//!   `missing_argument`)
//! - `route_registry_leaves` (gauge): leaf count of the active registry
//!
//! # Design Decisions
//! - Recording is a no-op until `init_metrics` installs the exporter
//! - Outcome labels are static strings, bounded cardinality

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_counter!(
        "route_resolutions_total",
        "Symbolic route name resolutions by outcome"
    );
    metrics::describe_gauge!("route_registry_leaves", "Leaf routes in the active registry");

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one resolution attempt.
pub fn record_resolution(outcome: &'static str) {
    metrics::counter!("route_resolutions_total", "outcome" => outcome).increment(1);
}

/// Publish the size of the registry in use.
pub fn record_registry_size(leaves: usize) {
    metrics::gauge!("route_registry_leaves").set(leaves as f64);
}
