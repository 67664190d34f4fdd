//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the `[routes]` table with the registry's own structural check
//! - Validate value ranges and socket addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::Registry;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route key under '{parent}' is empty")]
    EmptyKey { parent: String },

    #[error("route key '{route}' contains '.'")]
    DottedKey { route: String },

    #[error("route '{route}' has an empty path")]
    EmptyPath { route: String },

    #[error("route '{route}' path '{path}' must start with '/'")]
    NotRootRelative { route: String, path: String },

    #[error("route '{route}' template '{template}' must contain exactly one {{placeholder}}, found {found}")]
    Placeholder {
        route: String,
        template: String,
        found: usize,
    },

    #[error("route group '{route}' is empty")]
    EmptyGroup { route: String },

    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("server.request_timeout_secs must be greater than 0")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if let Some(routes) = &config.routes {
        if let Err(route_errors) = Registry::from_config(routes) {
            errors.extend(route_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
