//! Registry tree nodes.
//!
//! # Design Decisions
//! - Leaf kinds are an explicit enum, matched exhaustively by the resolver
//! - Group children are kept in a `BTreeMap` so listings are deterministic
//! - Generators are shared closures (`Arc<dyn Fn>`), so the whole tree is
//!   `Send + Sync` and cheap to clone

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

type GenerateFn = dyn Fn(&str) -> String + Send + Sync;

/// A node in the route registry.
#[derive(Debug, Clone)]
pub enum RouteNode {
    /// A fixed path. Bracketed tokens such as `[id]` are left as-is.
    Literal(String),
    /// A path built from a single runtime argument.
    Generator(Generator),
    /// A nesting level.
    Group(RouteGroup),
}

/// Kind of a [`RouteNode`], for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Literal,
    Generator,
    Group,
}

impl RouteNode {
    pub fn kind(&self) -> RouteKind {
        match self {
            RouteNode::Literal(_) => RouteKind::Literal,
            RouteNode::Generator(_) => RouteKind::Generator,
            RouteNode::Group(_) => RouteKind::Group,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, RouteNode::Group(_))
    }

    pub fn as_group(&self) -> Option<&RouteGroup> {
        match self {
            RouteNode::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            RouteNode::Literal(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_generator(&self) -> Option<&Generator> {
        match self {
            RouteNode::Generator(generator) => Some(generator),
            _ => None,
        }
    }
}

/// A single-argument path generator.
#[derive(Clone)]
pub struct Generator {
    template: Option<String>,
    func: Arc<GenerateFn>,
}

impl Generator {
    /// Wrap an arbitrary function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            template: None,
            func: Arc::new(func),
        }
    }

    /// Build a generator from a template with one `{name}` placeholder,
    /// e.g. `/members/{id}`.
    ///
    /// A malformed template (see [`is_well_formed_template`]) generates
    /// itself unchanged; [`crate::routing::RegistryBuilder::build`] rejects
    /// such templates.
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let func: Arc<GenerateFn> = match split_placeholder(&template) {
            Some(parts) if is_well_formed_template(&template) => {
                let prefix = parts.prefix.to_string();
                let suffix = parts.suffix.to_string();
                Arc::new(move |arg: &str| format!("{prefix}{arg}{suffix}"))
            }
            _ => {
                let fixed = template.clone();
                Arc::new(move |_: &str| fixed.clone())
            }
        };
        Self {
            template: Some(template),
            func,
        }
    }

    /// Produce the path for `arg`.
    pub fn generate(&self, arg: &str) -> String {
        (self.func)(arg)
    }

    /// The template this generator was built from, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.template {
            Some(template) => f.debug_tuple("Generator").field(template).finish(),
            None => f.write_str("Generator(<fn>)"),
        }
    }
}

/// The pieces of a template around its first `{name}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub prefix: &'a str,
    pub param: &'a str,
    pub suffix: &'a str,
}

/// Locate the first `{name}` placeholder in `template`.
pub fn split_placeholder(template: &str) -> Option<Placeholder<'_>> {
    let open = template.find('{')?;
    let close = open + template[open..].find('}')?;
    Some(Placeholder {
        prefix: &template[..open],
        param: &template[open + 1..close],
        suffix: &template[close + 1..],
    })
}

/// Count `{name}` placeholders in `template`.
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut rest = template;
    while let Some(found) = split_placeholder(rest) {
        count += 1;
        rest = found.suffix;
    }
    count
}

/// True when `template` has exactly one non-empty `{name}` placeholder and
/// no stray braces.
pub fn is_well_formed_template(template: &str) -> bool {
    template.matches('{').count() == 1
        && template.matches('}').count() == 1
        && split_placeholder(template).is_some_and(|p| !p.param.is_empty())
}

/// True when `path` contains any brace, i.e. is meant as a template.
pub fn has_braces(path: &str) -> bool {
    path.contains(|c| c == '{' || c == '}')
}

/// A named nesting level of the registry.
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    children: BTreeMap<String, RouteNode>,
}

impl RouteGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a direct child. Comparison is exact and case-sensitive.
    pub fn get(&self, key: &str) -> Option<&RouteNode> {
        self.children.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Child keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, node: RouteNode) {
        self.children.insert(key, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_generator() {
        let generator = Generator::from_template("/members/{id}");
        assert_eq!(generator.generate("42"), "/members/42");
        assert_eq!(generator.template(), Some("/members/{id}"));

        let nested = Generator::from_template("/loans/{loan}/repay");
        assert_eq!(nested.generate("7"), "/loans/7/repay");
    }

    #[test]
    fn test_malformed_template_never_splices_argument() {
        for template in ["/a/{id", "/fines/", "/a/{}", "/a/{id}}"] {
            let generator = Generator::from_template(template);
            assert_eq!(generator.generate("42"), template);
            assert!(!is_well_formed_template(template), "{template}");
        }
        assert!(is_well_formed_template("/a/{id}/b"));
        assert!(!is_well_formed_template("/a/{x}/{y}"));
        assert!(has_braces("/a/{id"));
        assert!(!has_braces("/members/[id]"));
    }

    #[test]
    fn test_closure_generator() {
        let generator = Generator::new(|id| format!("/meetings/{id}/minutes"));
        assert_eq!(generator.generate("12"), "/meetings/12/minutes");
        assert_eq!(generator.template(), None);
        assert_eq!(format!("{generator:?}"), "Generator(<fn>)");
    }

    #[test]
    fn test_placeholder_parsing() {
        let parts = split_placeholder("/a/{id}/b").unwrap();
        assert_eq!(parts.prefix, "/a/");
        assert_eq!(parts.param, "id");
        assert_eq!(parts.suffix, "/b");

        assert!(split_placeholder("/members/[id]").is_none());
        assert_eq!(placeholder_count("/a/{x}/{y}"), 2);
        assert_eq!(placeholder_count("/a/{unterminated"), 0);
    }

    #[test]
    fn test_node_accessors() {
        let literal = RouteNode::Literal("/dashboard".into());
        assert!(literal.is_leaf());
        assert_eq!(literal.as_literal(), Some("/dashboard"));
        assert!(literal.as_group().is_none());

        let mut group = RouteGroup::new();
        group.insert("list".into(), literal);
        let node = RouteNode::Group(group);
        assert_eq!(node.kind(), RouteKind::Group);
        assert!(!node.is_leaf());
        assert_eq!(node.as_group().map(RouteGroup::len), Some(1));
    }
}
