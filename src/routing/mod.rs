//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     built-in tree (dashboard.rs) or [routes] table from config
//!     → registry.rs (build immutable tree)
//!     → shared via Arc to renderers, debug view, CLI
//!
//! Lookup:
//!     symbolic name + args ("members.view", ["42"])
//!     → resolver.rs (walk segments)
//!     → Return: path string or ResolveError
//! ```
//!
//! # Design Decisions
//! - Outbound only: names expand to paths, requests are never matched
//! - Registry immutable at runtime
//! - Deterministic: same input always yields the same path or error
//! - Explicit error rather than silent default

pub mod dashboard;
pub mod node;
pub mod registry;
pub mod resolver;
pub mod types;

pub use node::{Generator, RouteGroup, RouteKind, RouteNode};
pub use registry::{Registry, RegistryBuilder, RouteEntry};
pub use resolver::{resolve, resolve_or};
pub use types::{ResolveError, ResolveErrorKind, ResolveResult};
