//! A static message catalog implementing [`Translator`].
//!
//! Messages are written the way front-end i18n setups write them: nested
//! maps per locale. They are flattened into dotted keys once, at
//! construction.

use std::collections::{BTreeMap, HashMap};

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::router::Translator;

/// Messages for one locale, flattened to dotted keys.
pub type Messages = HashMap<String, String>;

/// Per-locale translations with an optional fallback locale.
///
/// # Examples
///
/// ```
/// use crumbtrail::{MessageCatalog, Translator};
///
/// let yaml = "breadcrumb:\n  items:\n    about:\n      label: About us\n";
/// let catalog = MessageCatalog::new("en")
///     .with_messages_yaml("en", yaml)
///     .unwrap();
///
/// assert_eq!(catalog.translate("breadcrumb.items.about.label", "About").unwrap(), "About us");
/// assert_eq!(catalog.translate("breadcrumb.items.docs.label", "Docs").unwrap(), "Docs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    fallback_locale: Option<String>,
    messages: HashMap<String, Messages>,
}

impl MessageCatalog {
    /// Create an empty catalog for the given active locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback_locale: None,
            messages: HashMap::new(),
        }
    }

    /// Set the locale consulted when the active one has no entry.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    /// Add nested messages for a locale, merging with existing ones.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the root value is not a mapping.
    pub fn with_messages(mut self, locale: impl Into<String>, tree: &Value) -> Result<Self> {
        let locale = locale.into();
        let flat = flatten(tree).map_err(|message| Error::Validation {
            field: format!("messages.{locale}"),
            message,
        })?;
        self.messages.entry(locale).or_default().extend(flat);
        Ok(self)
    }

    /// Add nested messages for a locale from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or not a mapping.
    pub fn with_messages_yaml(self, locale: impl Into<String>, yaml: &str) -> Result<Self> {
        let tree: Value = serde_yaml::from_str(yaml)?;
        self.with_messages(locale, &tree)
    }

    /// Build a catalog from per-locale trees, as found in configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a locale's tree is not a mapping.
    pub fn from_trees(
        locale: impl Into<String>,
        fallback_locale: Option<String>,
        trees: &BTreeMap<String, Value>,
    ) -> Result<Self> {
        let mut catalog = Self::new(locale);
        catalog.fallback_locale = fallback_locale;
        for (tree_locale, tree) in trees {
            catalog = catalog.with_messages(tree_locale.clone(), tree)?;
        }
        Ok(catalog)
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The fallback locale, if any.
    #[must_use]
    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }

    /// Switch the active locale, keeping all messages.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Locales with at least one message, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Look up a key in the active locale, then the fallback locale.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let in_locale = |locale: &str| {
            self.messages
                .get(locale)
                .and_then(|messages| messages.get(key))
                .map(String::as_str)
        };

        in_locale(&self.locale).or_else(|| self.fallback_locale.as_deref().and_then(in_locale))
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str, fallback: &str) -> Result<String> {
        Ok(self.lookup(key).unwrap_or(fallback).to_string())
    }
}

/// Flatten a nested mapping into dotted keys.
///
/// Scalars are stringified, nulls and sequences are skipped.
fn flatten(tree: &Value) -> std::result::Result<Messages, String> {
    let mut messages = Messages::new();
    match tree {
        Value::Mapping(_) => flatten_into(tree, String::new(), &mut messages),
        Value::Null => {}
        _ => return Err("messages must be a mapping of keys to strings".to_string()),
    }
    Ok(messages)
}

fn flatten_into(value: &Value, key: String, messages: &mut Messages) {
    match value {
        Value::Mapping(mapping) => {
            for (child_key, child) in mapping {
                let Some(part) = scalar_to_string(child_key) else {
                    continue;
                };
                let next = if key.is_empty() {
                    part
                } else {
                    format!("{key}.{part}")
                };
                flatten_into(child, next, messages);
            }
        }
        Value::Tagged(tagged) => flatten_into(&tagged.value, key, messages),
        other => {
            if let Some(text) = scalar_to_string(other) {
                messages.insert(key, text);
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
