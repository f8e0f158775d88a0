//! Static route tables.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::pattern::RoutePattern;
use crate::error::{Error, Result};
use crate::path::normalize::{normalize_route_path, segments};
use crate::router::{RouteRecord, Router};

/// A declarative route, as written in configuration.
///
/// Child paths are relative to their parent unless they start with `/`.
///
/// # Examples
///
/// ```
/// use crumbtrail::RouteDefinition;
///
/// let docs = RouteDefinition::new("docs", "/docs")
///     .with_title("Documentation")
///     .with_children(vec![RouteDefinition::new("docs-slug", ":slug(.*)*")]);
/// assert_eq!(docs.children.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
    /// Logical route name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path pattern.
    pub path: String,
    /// Optional page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Nested routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    /// Create a named route.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            title: None,
            children: Vec::new(),
        }
    }

    /// Attach a title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach nested routes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteDefinition>) -> Self {
        self.children = children;
        self
    }
}

/// A route flattened out of the definition tree.
#[derive(Debug, Clone)]
struct CompiledRoute {
    pattern: RoutePattern,
    /// Indices into `RouteTable::records`, root to leaf.
    lineage: Vec<usize>,
}

/// An immutable table of routes implementing [`Router`].
///
/// Matching walks the definitions depth-first in declaration order and
/// tries a route's children before the route itself, so the deepest
/// declared match wins. The first full match is returned as the chain of
/// records from the outermost ancestor to the matched route.
///
/// # Examples
///
/// ```
/// use crumbtrail::{RouteDefinition, RouteTable, Router};
///
/// let table = RouteTable::new(vec![
///     RouteDefinition::new("index", "/"),
///     RouteDefinition::new("docs", "/docs").with_children(vec![
///         RouteDefinition::new("docs-slug", ":slug(.*)+"),
///     ]),
/// ])
/// .unwrap();
///
/// let chain = table.resolve("/docs/intro").unwrap().unwrap();
/// let names: Vec<_> = chain.iter().map(|r| r.name.as_deref().unwrap()).collect();
/// assert_eq!(names, ["docs", "docs-slug"]);
/// assert_eq!(chain[1].path, "/docs/:slug(.*)+");
/// assert!(table.resolve("/blog").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Compile a table from definitions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] for a malformed pattern and
    /// [`Error::DuplicateRoute`] when two routes share a name.
    pub fn new(definitions: Vec<RouteDefinition>) -> Result<Self> {
        let mut table = Self::default();
        let mut names = HashSet::new();
        for definition in &definitions {
            table.compile(definition, "", &[], &mut names)?;
        }
        log::debug!("compiled route table with {} routes", table.routes.len());
        Ok(table)
    }

    fn compile(
        &mut self,
        definition: &RouteDefinition,
        parent_path: &str,
        parent_lineage: &[usize],
        names: &mut HashSet<String>,
    ) -> Result<()> {
        if let Some(name) = &definition.name {
            if !names.insert(name.clone()) {
                return Err(Error::DuplicateRoute { name: name.clone() });
            }
        }

        let full_path = join_paths(parent_path, &definition.path);
        let pattern = RoutePattern::parse(&full_path)?;

        let index = self.records.len();
        self.records.push(RouteRecord {
            name: definition.name.clone(),
            title: definition.title.clone(),
            path: full_path.clone(),
        });

        let mut lineage = parent_lineage.to_vec();
        lineage.push(index);

        for child in &definition.children {
            self.compile(child, &full_path, &lineage, names)?;
        }
        self.routes.push(CompiledRoute { pattern, lineage });
        Ok(())
    }

    /// Number of routes, nested ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the table holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All route records in declaration order (parents before children).
    #[must_use]
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Find the root-to-leaf chain matching `path`, if any.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<Vec<RouteRecord>> {
        let normalized = normalize_route_path(path);
        let parts: Vec<&str> = segments(&normalized).collect();

        self.routes
            .iter()
            .find(|route| route.pattern.matches(&parts))
            .map(|route| {
                route
                    .lineage
                    .iter()
                    .map(|&index| self.records[index].clone())
                    .collect()
            })
    }
}

impl Router for RouteTable {
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>> {
        Ok(self.find(path))
    }
}

/// Join a child pattern onto its parent's full pattern.
fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') || parent.is_empty() {
        return normalize_pattern(child);
    }
    if child.is_empty() {
        return normalize_pattern(parent);
    }
    normalize_pattern(&format!("{parent}/{child}"))
}

/// Patterns follow the same separator rules as paths, but keep `?` as a
/// parameter modifier instead of a query delimiter.
fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = String::with_capacity(pattern.len() + 1);
    for segment in segments(pattern.trim()) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chain: &[RouteRecord]) -> Vec<&str> {
        chain.iter().filter_map(|r| r.name.as_deref()).collect()
    }

    fn sample_table() -> RouteTable {
        RouteTable::new(vec![
            RouteDefinition::new("index", "/").with_title("Home"),
            RouteDefinition::new("about___en", "/about"),
            RouteDefinition::new("docs", "/docs").with_children(vec![
                RouteDefinition::new("docs-index", ""),
                RouteDefinition::new("docs-slug", ":slug(.*)+"),
            ]),
            RouteDefinition::new("blog-post", "/blog/:slug"),
        ])
        .unwrap()
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("", "/"), "/");
        assert_eq!(join_paths("/docs", ":slug"), "/docs/:slug");
        assert_eq!(join_paths("/docs", ""), "/docs");
        assert_eq!(join_paths("/docs", "/abs"), "/abs");
        assert_eq!(join_paths("/", "child"), "/child");
        assert_eq!(join_paths("", "about"), "/about");
    }

    #[test]
    fn test_pattern_normalization_keeps_modifiers() {
        assert_eq!(normalize_pattern("/blog/:page?/"), "/blog/:page?");
    }

    #[test]
    fn test_root_match() {
        let chain = sample_table().find("/").unwrap();
        assert_eq!(names(&chain), ["index"]);
        assert_eq!(chain[0].title.as_deref(), Some("Home"));
    }

    #[test]
    fn test_nested_index_child_wins_over_parent() {
        let chain = sample_table().find("/docs").unwrap();
        assert_eq!(names(&chain), ["docs", "docs-index"]);
    }

    #[test]
    fn test_nested_catch_all() {
        let chain = sample_table().find("/docs/a/b").unwrap();
        assert_eq!(names(&chain), ["docs", "docs-slug"]);
        assert_eq!(chain[1].path, "/docs/:slug(.*)+");
    }

    #[test]
    fn test_param_route() {
        let table = sample_table();
        assert_eq!(names(&table.find("/blog/hello").unwrap()), ["blog-post"]);
        assert!(table.find("/blog").is_none());
        assert!(table.find("/blog/a/b").is_none());
    }

    #[test]
    fn test_lookup_normalizes_path() {
        let table = sample_table();
        assert_eq!(names(&table.find("//about/?x=1").unwrap()), ["about___en"]);
    }

    #[test]
    fn test_declaration_order_decides() {
        let table = RouteTable::new(vec![
            RouteDefinition::new("catch", "/*"),
            RouteDefinition::new("about", "/about"),
        ])
        .unwrap();
        assert_eq!(names(&table.find("/about").unwrap()), ["catch"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = RouteTable::new(vec![
            RouteDefinition::new("a", "/a"),
            RouteDefinition::new("b", "/b").with_children(vec![RouteDefinition::new("a", "x")]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateRoute { ref name } if name == "a"));
    }

    #[test]
    fn test_unnamed_routes_allowed() {
        let table = RouteTable::new(vec![
            RouteDefinition {
                path: "/layout".into(),
                children: vec![RouteDefinition::new("inner", "inner")],
                ..Default::default()
            },
            RouteDefinition {
                path: "/other".into(),
                ..Default::default()
            },
        ])
        .unwrap();
        let chain = table.find("/layout/inner").unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].name, None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = RouteTable::new(vec![RouteDefinition::new("bad", "/*/x")]).unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { .. }));
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("/").unwrap(), None);
    }

    #[test]
    fn test_definitions_from_yaml() {
        let yaml = r"
- name: index
  path: /
  title: Home
- name: docs
  path: /docs
  children:
    - name: docs-slug
      path: ':slug(.*)*'
";
        let definitions: Vec<RouteDefinition> = serde_yaml::from_str(yaml).unwrap();
        let table = RouteTable::new(definitions).unwrap();
        assert_eq!(names(&table.find("/docs/x").unwrap()), ["docs", "docs-slug"]);
    }
}
