//! Shared utilities for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use route_registry::config::ServerConfig;
use route_registry::{DebugServer, Registry};
use serde_json::Value;
use tower::ServiceExt;

/// A small substitute registry, independent of the dashboard routes.
#[allow(dead_code)]
pub fn library_registry() -> Registry {
    Registry::builder()
        .literal("home", "/")
        .group("books", |g| {
            g.literal("list", "/books")
                .template("view", "/books/{isbn}")
                .generator("loan", |isbn| format!("/books/{isbn}/loan"))
        })
        .build()
        .unwrap()
}

/// Send a GET through the debug server's router and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(registry: Registry, uri: &str) -> (StatusCode, Value) {
    let server = DebugServer::new(ServerConfig::default(), Arc::new(registry));
    let response = server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
