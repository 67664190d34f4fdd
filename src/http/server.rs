//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the debug handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Stop on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::response::{HealthStatus, ResolvedRoute};
use crate::routing::{Registry, ResolveError, RouteEntry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// HTTP server exposing the registry for diagnostics.
pub struct DebugServer {
    router: Router,
}

impl DebugServer {
    /// Create a new server over a shared registry.
    pub fn new(config: ServerConfig, registry: Arc<Registry>) -> Self {
        let state = AppState { registry };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(get_health))
            .route("/routes", get(list_routes))
            .route("/routes/all", get(list_entries))
            .route("/resolve/{name}", get(resolve_route))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown signal behind `stop` fires.
    ///
    /// Subscribe before spawning the server so an early trigger is not
    /// missed.
    pub async fn run(
        self,
        listener: TcpListener,
        mut stop: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Debug server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = stop.recv().await;
            })
            .await?;

        tracing::info!("Debug server stopped");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    arg: Option<String>,
}

async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

async fn list_routes(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .registry
            .top_level_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

async fn list_entries(State(state): State<AppState>) -> Json<Vec<RouteEntry>> {
    Json(state.registry.entries())
}

async fn resolve_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvedRoute>, ResolveError> {
    let args: Vec<&str> = query.arg.as_deref().into_iter().collect();

    match state.registry.resolve(&name, &args) {
        Ok(path) => Ok(Json(ResolvedRoute { name, path })),
        Err(e) => {
            tracing::warn!(route = %name, error = %e, "Debug lookup failed");
            Err(e)
        }
    }
}
