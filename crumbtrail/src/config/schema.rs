//! Configuration schema definitions.
//!
//! This module defines the configuration structure for crumbtrail: the
//! route table, the message catalog and the resolver tunables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::catalog::MessageCatalog;
use crate::error::Result;
use crate::locale::LocaleSuffix;
use crate::output::OutputFormat;
use crate::resolver::ResolverOptions;
use crate::routes::{RouteDefinition, RouteTable};

/// Locale used when configuration names none.
pub const DEFAULT_LOCALE: &str = "en";

/// Complete configuration structure.
///
/// Every field is optional so that configuration files can be layered.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "routes:\n  - name: index\n    path: /\n    title: Home\nroot_label: Start\n",
/// )
/// .unwrap();
/// assert_eq!(config.root_label.as_deref(), Some("Start"));
/// assert_eq!(config.route_table().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Route definitions (replaced wholesale by higher-precedence sources).
    pub routes: Option<Vec<RouteDefinition>>,

    /// Nested messages per locale (merged key by key).
    pub messages: Option<BTreeMap<String, Value>>,

    /// Active locale.
    pub locale: Option<String>,

    /// Locale consulted when the active locale lacks a key.
    pub fallback_locale: Option<String>,

    /// Label for a matched root route without a title.
    pub root_label: Option<String>,

    /// First part of translation keys.
    pub key_prefix: Option<String>,

    /// Last part of translation keys.
    pub key_suffix: Option<String>,

    /// Separator between a route's logical name and its locale.
    pub locale_separator: Option<String>,

    /// Output format for the CLI.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The active locale, defaulting to `en`.
    #[must_use]
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Resolver options described by this configuration.
    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::default();
        if let Some(prefix) = &self.key_prefix {
            options = options.with_key_prefix(prefix.clone());
        }
        if let Some(suffix) = &self.key_suffix {
            options = options.with_key_suffix(suffix.clone());
        }
        if let Some(label) = &self.root_label {
            options = options.with_root_label(label.clone());
        }
        if let Some(separator) = &self.locale_separator {
            options = options.with_locale_suffix(LocaleSuffix::new(separator.clone()));
        }
        options
    }

    /// Compile the configured routes.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid patterns or duplicate route names.
    pub fn route_table(&self) -> Result<RouteTable> {
        RouteTable::new(self.routes.clone().unwrap_or_default())
    }

    /// Build the message catalog for the active locale.
    ///
    /// # Errors
    ///
    /// Returns an error when a locale's messages are not a mapping.
    pub fn catalog(&self) -> Result<MessageCatalog> {
        let empty = BTreeMap::new();
        MessageCatalog::from_trees(
            self.effective_locale(),
            self.fallback_locale.clone(),
            self.messages.as_ref().unwrap_or(&empty),
        )
    }
}
