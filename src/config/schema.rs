//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! registry service. All types derive Serde traits for deserialization from
//! config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::loader::ConfigError;
use crate::routing::node::has_braces;
use crate::routing::Registry;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Debug view server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Substitute route table. The built-in dashboard routes are used when
    /// absent.
    pub routes: Option<RouteTable>,
}

impl AppConfig {
    /// Build the registry this configuration describes.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        match &self.routes {
            Some(table) => Registry::from_config(table).map_err(ConfigError::Validation),
            None => Ok(Registry::dashboard()),
        }
    }
}

/// Debug view server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8090").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8090".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// A table of named route specs, one nesting level.
pub type RouteTable = BTreeMap<String, RouteSpec>;

/// A route as written in the config file.
///
/// ```toml
/// dashboard = "/dashboard"    # literal
/// view = "/members/{id}"      # generator: a path with a `{name}` placeholder
/// [members]                   # group: a table is always a group
/// ```
///
/// Any path containing a brace is read as a generator template and must
/// then hold exactly one well-formed placeholder. Literal placeholders meant
/// for display use brackets (`/members/[id]`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RouteSpec {
    Literal(String),
    Generator(String),
    Group(RouteTable),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRouteSpec {
    Path(String),
    Group(RouteTable),
}

impl From<RawRouteSpec> for RouteSpec {
    fn from(raw: RawRouteSpec) -> Self {
        match raw {
            RawRouteSpec::Path(path) if has_braces(&path) => RouteSpec::Generator(path),
            RawRouteSpec::Path(path) => RouteSpec::Literal(path),
            RawRouteSpec::Group(table) => RouteSpec::Group(table),
        }
    }
}

impl<'de> Deserialize<'de> for RouteSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawRouteSpec::deserialize(deserializer).map(RouteSpec::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:8090");
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.metrics_enabled);
        assert!(config.routes.is_none());
        assert!(config.registry().unwrap().get("members").is_some());
    }

    #[test]
    fn test_route_spec_shapes() {
        let config: AppConfig = toml::from_str(
            r#"
            [routes]
            home = "/"

            [routes.members]
            view = "/members/{id}"
            profile = "/members/[id]"

            [routes.members.reports]
            yearly = "/members/reports/yearly"
            "#,
        )
        .unwrap();

        let routes = config.routes.unwrap();
        assert_eq!(routes["home"], RouteSpec::Literal("/".into()));
        let RouteSpec::Group(members) = &routes["members"] else {
            panic!("members should be a group");
        };
        assert_eq!(members["view"], RouteSpec::Generator("/members/{id}".into()));
        assert_eq!(members["profile"], RouteSpec::Literal("/members/[id]".into()));
        assert!(matches!(members["reports"], RouteSpec::Group(_)));
    }

    #[test]
    fn test_table_is_always_a_group() {
        let config: AppConfig = toml::from_str(
            r#"
            [routes.docs]
            template = "/docs/{slug}"
            "#,
        )
        .unwrap();

        let routes = config.routes.as_ref().unwrap();
        let RouteSpec::Group(docs) = &routes["docs"] else {
            panic!("docs should be a group");
        };
        assert_eq!(docs["template"], RouteSpec::Generator("/docs/{slug}".into()));

        let registry = config.registry().unwrap();
        assert_eq!(registry.resolve("docs.template", &["intro"]).unwrap(), "/docs/intro");
        assert_eq!(
            registry.resolve("docs", &["intro"]).unwrap_err().kind(),
            crate::routing::ResolveErrorKind::IncompleteRoute
        );
    }

    #[test]
    fn test_serializes_back_to_plain_strings() {
        let mut table = RouteTable::new();
        table.insert("view".into(), RouteSpec::Generator("/members/{id}".into()));
        table.insert("list".into(), RouteSpec::Literal("/members".into()));
        let text = toml::to_string(&table).unwrap();
        let parsed: RouteTable = toml::from_str(&text).unwrap();
        assert_eq!(parsed, table);
    }
}
