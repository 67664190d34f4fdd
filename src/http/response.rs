//! Response bodies for the debug view.
//!
//! # Responsibilities
//! - Serialize resolved routes and listings
//! - Map resolution errors to HTTP status codes
//!
//! # Design Decisions
//! - Missing names and wrong shapes are 404 Not Found
//! - A generator called without its argument is 422 Unprocessable Entity
//! - Error bodies carry the kind and original input, never a fallback path

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::{ResolveError, ResolveErrorKind};

/// A successful resolution.
#[derive(Debug, Serialize)]
pub struct ResolvedRoute {
    pub name: String,
    pub path: String,
}

/// JSON body describing a failed resolution.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ResolveErrorKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    pub message: String,
}

impl From<&ResolveError> for ErrorBody {
    fn from(err: &ResolveError) -> Self {
        Self {
            error: err.kind(),
            name: err.name().to_string(),
            segment: err.segment().map(str::to_string),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// HTTP status for a failed resolution.
pub fn status_for(kind: ResolveErrorKind) -> StatusCode {
    match kind {
        ResolveErrorKind::UnknownRoute
        | ResolveErrorKind::PathTooDeep
        | ResolveErrorKind::IncompleteRoute => StatusCode::NOT_FOUND,
        ResolveErrorKind::MissingArgument => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        (status_for(self.kind()), Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ResolveErrorKind::UnknownRoute), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ResolveErrorKind::IncompleteRoute), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ResolveErrorKind::MissingArgument),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_body_json() {
        let err = ResolveError::UnknownRoute {
            name: "content.articles".into(),
            segment: "articles".into(),
        };
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(json["error"], "unknown_route");
        assert_eq!(json["name"], "content.articles");
        assert_eq!(json["segment"], "articles");

        let err = ResolveError::IncompleteRoute { name: "members".into() };
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert!(json.get("segment").is_none());
    }
}
