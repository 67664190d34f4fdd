//! Route registry and resolver for the savings-group dashboard.
//!
//! Symbolic names such as `"members.view"` expand to outbound link paths:
//!
//! ```
//! use route_registry::Registry;
//!
//! let registry = Registry::dashboard();
//! assert_eq!(registry.resolve("members.add", &[]).unwrap(), "/members/add");
//! assert_eq!(registry.resolve("members.view", &["42"]).unwrap(), "/members/42");
//! assert!(registry.resolve("content.articles", &[]).is_err());
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::AppConfig;
pub use http::DebugServer;
pub use lifecycle::Shutdown;
pub use routing::{resolve, resolve_or, Registry, ResolveError, ResolveErrorKind};
