//! Configuration merging and precedence handling.
//!
//! Scalars are overwritten, routes are replaced as a whole, and messages
//! are merged per locale so a local file can override a single label.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;
use serde_yaml::Value;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::{Config, ConfigMerger};
///
/// let low = Config { locale: Some("en".to_string()), ..Default::default() };
/// let high = Config { locale: Some("fr".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.locale, Some("fr".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!(
                "merging {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Routes: complete replacement
    /// - Messages: deep merge per locale, source wins on conflicting keys
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.routes.is_some() {
            target.routes.clone_from(&source.routes);
        }

        if let Some(messages) = &source.messages {
            let merged = target.messages.get_or_insert_with(Default::default);
            for (locale, tree) in messages {
                match merged.get_mut(locale) {
                    Some(existing) => merge_values(existing, tree),
                    None => {
                        merged.insert(locale.clone(), tree.clone());
                    }
                }
            }
        }

        overwrite(&mut target.locale, &source.locale);
        overwrite(&mut target.fallback_locale, &source.fallback_locale);
        overwrite(&mut target.root_label, &source.root_label);
        overwrite(&mut target.key_prefix, &source.key_prefix);
        overwrite(&mut target.key_suffix, &source.key_suffix);
        overwrite(&mut target.locale_separator, &source.locale_separator);

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

fn overwrite(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        target.clone_from(source);
    }
}

/// Deep-merge two YAML values; mappings merge recursively, anything else is replaced.
fn merge_values(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Mapping(target), Value::Mapping(source)) => {
            for (key, value) in source {
                match target.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
