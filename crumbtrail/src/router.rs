//! Collaborator seams: route matching and translation.
//!
//! The resolver never routes or translates on its own. Hosts hand it a
//! [`Router`] and, optionally, a [`Translator`]. Errors returned by either
//! are propagated to the resolver's caller unchanged.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A route matched for a path.
///
/// # Examples
///
/// ```
/// use crumbtrail::RouteRecord;
///
/// let record = RouteRecord::named("about___en", "/about").with_title("About us");
/// assert_eq!(record.name.as_deref(), Some("about___en"));
/// assert_eq!(record.title.as_deref(), Some("About us"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Logical route name, possibly carrying a `___<locale>` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The route's path pattern.
    #[serde(default)]
    pub path: String,
}

impl RouteRecord {
    /// Create a named record.
    #[must_use]
    pub fn named(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            title: None,
            path: path.into(),
        }
    }

    /// Attach a title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Matches paths against a route table.
pub trait Router {
    /// Return the root-to-leaf chain of records matching `path`.
    ///
    /// `Ok(None)` and an empty list both mean "no match".
    ///
    /// # Errors
    ///
    /// Implementations may fail; the resolver forwards the error untouched.
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>>;
}

/// Looks up display strings by translation key.
pub trait Translator {
    /// Translate `key`, returning `fallback` verbatim when no entry exists.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the resolver forwards the error untouched.
    fn translate(&self, key: &str, fallback: &str) -> Result<String>;
}

impl<T: Router + ?Sized> Router for &T {
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>> {
        (**self).resolve(path)
    }
}

impl<T: Router + ?Sized> Router for Box<T> {
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>> {
        (**self).resolve(path)
    }
}

impl<T: Router + ?Sized> Router for Arc<T> {
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>> {
        (**self).resolve(path)
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, key: &str, fallback: &str) -> Result<String> {
        (**self).translate(key, fallback)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, key: &str, fallback: &str) -> Result<String> {
        (**self).translate(key, fallback)
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn translate(&self, key: &str, fallback: &str) -> Result<String> {
        (**self).translate(key, fallback)
    }
}

/// Adapts a closure into a [`Router`].
///
/// ```
/// use crumbtrail::{FnRouter, RouteRecord, Router};
///
/// let router = FnRouter(|path: &str| -> crumbtrail::Result<_> {
///     Ok((path == "/").then(|| vec![RouteRecord::named("index", "/")]))
/// });
/// assert!(router.resolve("/").unwrap().is_some());
/// assert!(router.resolve("/missing").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnRouter<F>(pub F);

impl<F> Router for FnRouter<F>
where
    F: Fn(&str) -> Result<Option<Vec<RouteRecord>>>,
{
    fn resolve(&self, path: &str) -> Result<Option<Vec<RouteRecord>>> {
        (self.0)(path)
    }
}

/// Adapts a closure into a [`Translator`].
#[derive(Debug, Clone, Copy)]
pub struct FnTranslator<F>(pub F);

impl<F> Translator for FnTranslator<F>
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn translate(&self, key: &str, fallback: &str) -> Result<String> {
        (self.0)(key, fallback)
    }
}

/// A translator with no entries: always returns the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, _key: &str, fallback: &str) -> Result<String> {
        Ok(fallback.to_string())
    }
}
