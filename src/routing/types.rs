//! Resolution error definitions.

use serde::Serialize;
use thiserror::Error;

/// Errors returned when a symbolic route name cannot be turned into a path.
///
/// Every variant carries the name exactly as the caller supplied it so a
/// renderer can log it next to whatever fallback it chooses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A segment does not exist in the group being searched.
    #[error("unknown route '{name}': no entry named '{segment}'")]
    UnknownRoute { name: String, segment: String },

    /// Segments remain after a leaf was reached.
    #[error("route '{name}' is too deep: cannot descend into '{segment}' below a leaf")]
    PathTooDeep { name: String, segment: String },

    /// The name stops at a group instead of a leaf.
    #[error("route '{name}' names a group, not a path")]
    IncompleteRoute { name: String },

    /// A generator was reached without an argument to interpolate.
    #[error("route '{name}' requires an argument")]
    MissingArgument { name: String },
}

/// Discriminant of [`ResolveError`], used for metrics labels and JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveErrorKind {
    UnknownRoute,
    PathTooDeep,
    IncompleteRoute,
    MissingArgument,
}

impl ResolveErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveErrorKind::UnknownRoute => "unknown_route",
            ResolveErrorKind::PathTooDeep => "path_too_deep",
            ResolveErrorKind::IncompleteRoute => "incomplete_route",
            ResolveErrorKind::MissingArgument => "missing_argument",
        }
    }
}

impl std::fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::UnknownRoute { .. } => ResolveErrorKind::UnknownRoute,
            ResolveError::PathTooDeep { .. } => ResolveErrorKind::PathTooDeep,
            ResolveError::IncompleteRoute { .. } => ResolveErrorKind::IncompleteRoute,
            ResolveError::MissingArgument { .. } => ResolveErrorKind::MissingArgument,
        }
    }

    /// The symbolic name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            ResolveError::UnknownRoute { name, .. }
            | ResolveError::PathTooDeep { name, .. }
            | ResolveError::IncompleteRoute { name }
            | ResolveError::MissingArgument { name } => name,
        }
    }

    /// The segment at which resolution stopped, when there is one.
    pub fn segment(&self) -> Option<&str> {
        match self {
            ResolveError::UnknownRoute { segment, .. }
            | ResolveError::PathTooDeep { segment, .. } => Some(segment),
            ResolveError::IncompleteRoute { .. } | ResolveError::MissingArgument { .. } => None,
        }
    }
}

/// Result type for route resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
