//! Symbolic name resolution.
//!
//! # Responsibilities
//! - Split a dotted name into segments and walk the registry
//! - Return the literal path, or the generated path for one argument
//! - Report an explicit error instead of a default path
//!
//! # Design Decisions
//! - Pure function of (registry, name, args): no cache, no state
//! - Exact, case-sensitive segment comparison
//! - No cross-group fallback (`content.articles` never finds `articles`)
//! - Literals ignore arguments so call sites can pass them uniformly

use crate::observability::metrics;
use crate::routing::node::RouteNode;
use crate::routing::registry::Registry;
use crate::routing::types::{ResolveError, ResolveResult};

/// Resolve `name` against `registry`.
///
/// `name` is either a bare top-level key (`"dashboard"`) or a dotted path
/// (`"members.view"`). Generators use the first entry of `args`; any
/// further arguments are ignored.
pub fn resolve(registry: &Registry, name: &str, args: &[&str]) -> ResolveResult<String> {
    let outcome = walk(registry, name, args);

    match &outcome {
        Ok(path) => {
            tracing::debug!(route = %name, path = %path, "Route resolved");
            metrics::record_resolution("ok");
        }
        Err(e) => {
            tracing::debug!(route = %name, error = %e, "Route resolution failed");
            metrics::record_resolution(e.kind().as_str());
        }
    }

    outcome
}

/// Resolve `name`, substituting `fallback` on any failure.
///
/// For renderers that would rather emit a dead link than fail.
pub fn resolve_or(registry: &Registry, name: &str, args: &[&str], fallback: &str) -> String {
    resolve(registry, name, args).unwrap_or_else(|_| fallback.to_string())
}

fn walk(registry: &Registry, name: &str, args: &[&str]) -> ResolveResult<String> {
    let mut group = registry.root();
    let mut node: Option<&RouteNode> = None;

    for segment in name.split('.') {
        if let Some(current) = node {
            group = match current {
                RouteNode::Group(children) => children,
                RouteNode::Literal(_) | RouteNode::Generator(_) => {
                    return Err(ResolveError::PathTooDeep {
                        name: name.to_string(),
                        segment: segment.to_string(),
                    });
                }
            };
        }

        node = Some(group.get(segment).ok_or_else(|| ResolveError::UnknownRoute {
            name: name.to_string(),
            segment: segment.to_string(),
        })?);
    }

    // `split` always yields at least one segment, so a node was found.
    let Some(node) = node else {
        return Err(ResolveError::UnknownRoute {
            name: name.to_string(),
            segment: String::new(),
        });
    };

    match node {
        RouteNode::Literal(path) => Ok(path.clone()),
        RouteNode::Generator(generator) => match args.first() {
            Some(arg) => Ok(generator.generate(arg)),
            None => Err(ResolveError::MissingArgument {
                name: name.to_string(),
            }),
        },
        RouteNode::Group(_) => Err(ResolveError::IncompleteRoute {
            name: name.to_string(),
        }),
    }
}
