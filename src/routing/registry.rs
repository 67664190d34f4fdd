//! The route registry.
//!
//! # Responsibilities
//! - Own the symbolic-name → path tree
//! - Offer direct structural access for callers that know the shape
//! - List names and leaves for tooling
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Built explicitly at startup and passed by reference, never global
//! - Keys never contain `.`; dotted names are purely structural
//! - Every construction path runs the same structural check

use serde::Serialize;

use crate::config::schema::{RouteSpec, RouteTable};
use crate::config::validation::ValidationError;
use crate::routing::node::{
    is_well_formed_template, placeholder_count, Generator, RouteGroup, RouteKind, RouteNode,
};
use crate::routing::resolver;
use crate::routing::types::ResolveResult;

/// Immutable tree of named routes.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    root: RouteGroup,
}

/// A leaf of the registry flattened to its dotted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub name: String,
    pub kind: RouteKind,
    /// Literal path, generator template, or `<fn>` for closure generators.
    pub path: String,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from a configuration route table.
    pub fn from_config(table: &RouteTable) -> Result<Self, Vec<ValidationError>> {
        let registry = Self {
            root: group_from_specs(table),
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Check the tree invariants, collecting every violation:
    /// - keys are non-empty and contain no `.`
    /// - literal paths and templates are non-empty and start with `/`
    /// - templates hold exactly one `{name}` placeholder
    /// - nested groups are non-empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_group(&self.root, "", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The root group.
    pub fn root(&self) -> &RouteGroup {
        &self.root
    }

    /// A top-level node, e.g. `registry.get("members")`.
    pub fn get(&self, key: &str) -> Option<&RouteNode> {
        self.root.get(key)
    }

    /// Sorted top-level keys.
    pub fn top_level_names(&self) -> Vec<&str> {
        self.root.keys().collect()
    }

    /// Every leaf with its dotted name, sorted by name.
    pub fn entries(&self) -> Vec<RouteEntry> {
        let mut entries = Vec::new();
        collect_entries(&self.root, "", &mut entries);
        entries
    }

    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.root)
    }

    /// Resolve a symbolic name. See [`resolver::resolve`].
    pub fn resolve(&self, name: &str, args: &[&str]) -> ResolveResult<String> {
        resolver::resolve(self, name, args)
    }
}

fn group_from_specs(table: &RouteTable) -> RouteGroup {
    let mut group = RouteGroup::new();
    for (key, spec) in table {
        let node = match spec {
            RouteSpec::Literal(path) => RouteNode::Literal(path.clone()),
            RouteSpec::Generator(template) => {
                RouteNode::Generator(Generator::from_template(template.clone()))
            }
            RouteSpec::Group(children) => RouteNode::Group(group_from_specs(children)),
        };
        group.insert(key.clone(), node);
    }
    group
}

fn check_group(group: &RouteGroup, prefix: &str, errors: &mut Vec<ValidationError>) {
    for (key, node) in group.iter() {
        let route = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };

        if key.is_empty() {
            errors.push(ValidationError::EmptyKey {
                parent: if prefix.is_empty() { "<root>".into() } else { prefix.into() },
            });
        } else if key.contains('.') {
            errors.push(ValidationError::DottedKey { route: route.clone() });
        }

        match node {
            RouteNode::Literal(path) => check_path(&route, path, errors),
            RouteNode::Generator(generator) => {
                // Closure generators have no template to inspect.
                let Some(template) = generator.template() else {
                    continue;
                };
                check_path(&route, template, errors);
                if !is_well_formed_template(template) {
                    errors.push(ValidationError::Placeholder {
                        route,
                        template: template.to_string(),
                        found: placeholder_count(template),
                    });
                }
            }
            RouteNode::Group(children) if children.is_empty() => {
                errors.push(ValidationError::EmptyGroup { route });
            }
            RouteNode::Group(children) => check_group(children, &route, errors),
        }
    }
}

fn check_path(route: &str, path: &str, errors: &mut Vec<ValidationError>) {
    if path.is_empty() {
        errors.push(ValidationError::EmptyPath { route: route.to_string() });
    } else if !path.starts_with('/') {
        errors.push(ValidationError::NotRootRelative {
            route: route.to_string(),
            path: path.to_string(),
        });
    }
}

fn collect_entries(group: &RouteGroup, prefix: &str, out: &mut Vec<RouteEntry>) {
    for (key, node) in group.iter() {
        let name = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            RouteNode::Literal(path) => out.push(RouteEntry {
                name,
                kind: RouteKind::Literal,
                path: path.clone(),
            }),
            RouteNode::Generator(generator) => out.push(RouteEntry {
                name,
                kind: RouteKind::Generator,
                path: generator.template().unwrap_or("<fn>").to_string(),
            }),
            RouteNode::Group(children) => collect_entries(children, &name, out),
        }
    }
}

fn count_leaves(group: &RouteGroup) -> usize {
    group
        .iter()
        .map(|(_, node)| match node {
            RouteNode::Group(children) => count_leaves(children),
            _ => 1,
        })
        .sum()
}

/// Builder for a [`Registry`] or one of its groups.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    group: RouteGroup,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed path.
    pub fn literal(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.group.insert(key.into(), RouteNode::Literal(path.into()));
        self
    }

    /// Add a generator from a `{name}` template.
    pub fn template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.group
            .insert(key.into(), RouteNode::Generator(Generator::from_template(template)));
        self
    }

    /// Add a generator backed by an arbitrary function.
    pub fn generator<F>(mut self, key: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.group
            .insert(key.into(), RouteNode::Generator(Generator::new(func)));
        self
    }

    /// Add a nested group, populated by `build`.
    pub fn group<F>(mut self, key: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(RegistryBuilder) -> RegistryBuilder,
    {
        let child = build(RegistryBuilder::new());
        self.group.insert(key.into(), RouteNode::Group(child.group));
        self
    }

    /// Finish the registry, rejecting trees that break its invariants
    /// (see [`Registry::validate`]).
    pub fn build(self) -> Result<Registry, Vec<ValidationError>> {
        let registry = self.build_unchecked();
        registry.validate()?;
        Ok(registry)
    }

    /// Finish without checking. Only for trees covered by a validity test.
    pub(crate) fn build_unchecked(self) -> Registry {
        Registry { root: self.group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        Registry::builder()
            .literal("home", "/")
            .group("members", |g| {
                g.literal("list", "/members")
                    .template("view", "/members/{id}")
                    .generator("card", |id| format!("/members/{id}/card"))
            })
            .group("reports", |g| g.literal("overview", "/reports"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_structural_access() {
        let registry = sample();
        let list = registry
            .get("members")
            .and_then(RouteNode::as_group)
            .and_then(|g| g.get("list"))
            .and_then(RouteNode::as_literal);
        assert_eq!(list, Some("/members"));
        assert!(registry.get("Members").is_none());
    }

    #[test]
    fn test_top_level_names_sorted() {
        let registry = sample();
        assert_eq!(registry.top_level_names(), vec!["home", "members", "reports"]);
    }

    #[test]
    fn test_entries_and_leaf_count() {
        let registry = sample();
        let entries = registry.entries();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["home", "members.card", "members.list", "members.view", "reports.overview"]
        );
        assert_eq!(entries[1].path, "<fn>");
        assert_eq!(entries[3].kind, RouteKind::Generator);
        assert_eq!(entries[3].path, "/members/{id}");
        assert_eq!(registry.leaf_count(), 5);
    }

    #[test]
    fn test_build_rejects_dotted_key() {
        let errors = Registry::builder()
            .literal("content.articles", "/content/articles")
            .build()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DottedKey { route: "content.articles".into() }]
        );
    }

    #[test]
    fn test_build_rejects_empty_key() {
        let errors = Registry::builder()
            .group("members", |g| g.literal("", "/members"))
            .build()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyKey { parent: "members".into() }]);
    }

    #[test]
    fn test_build_rejects_empty_and_relative_paths() {
        let errors = Registry::builder()
            .literal("blank", "")
            .literal("relative", "members")
            .template("loose", "members/{id}")
            .build()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyPath { route: "blank".into() },
                ValidationError::NotRootRelative {
                    route: "loose".into(),
                    path: "members/{id}".into(),
                },
                ValidationError::NotRootRelative {
                    route: "relative".into(),
                    path: "members".into(),
                },
            ]
        );
    }

    #[test]
    fn test_build_rejects_empty_group() {
        let errors = Registry::builder()
            .literal("home", "/")
            .group("empty", |g| g)
            .build()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyGroup { route: "empty".into() }]);
    }

    #[test]
    fn test_build_rejects_malformed_templates() {
        let errors = Registry::builder()
            .group("a", |g| {
                g.template("open", "/a/{id")
                    .template("two", "/a/{x}/{y}")
                    .template("none", "/a/")
            })
            .build()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Placeholder {
                    route: "a.none".into(),
                    template: "/a/".into(),
                    found: 0,
                },
                ValidationError::Placeholder {
                    route: "a.open".into(),
                    template: "/a/{id".into(),
                    found: 0,
                },
                ValidationError::Placeholder {
                    route: "a.two".into(),
                    template: "/a/{x}/{y}".into(),
                    found: 2,
                },
            ]
        );
    }

    #[test]
    fn test_literal_may_carry_informational_placeholder() {
        let registry = Registry::builder()
            .literal("profile", "/members/[id]")
            .build()
            .unwrap();
        assert_eq!(registry.resolve("profile", &["1"]).unwrap(), "/members/[id]");
    }

    #[test]
    fn test_from_config_table() {
        let table: RouteTable = toml::from_str(
            r#"
            dashboard = "/dashboard"

            [members]
            add = "/members/add"
            view = "/members/{id}"
            "#,
        )
        .unwrap();

        let registry = Registry::from_config(&table).unwrap();
        assert_eq!(registry.resolve("dashboard", &[]).unwrap(), "/dashboard");
        assert_eq!(registry.resolve("members.view", &["9"]).unwrap(), "/members/9");
        assert_eq!(registry.leaf_count(), 3);
    }
}
