//! Debug HTTP view of the route registry.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → handler (list names / list leaves / resolve one name)
//!     → response.rs (JSON body, status mapping)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, DebugServer};
