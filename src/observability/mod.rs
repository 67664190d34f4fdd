//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Resolver, config loader, debug server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution counters, registry gauge)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON optional) for machine parsing
//! - Metrics are cheap (no-ops until a recorder is installed)
//! - Request ID flows through the debug server's spans

pub mod logging;
pub mod metrics;
