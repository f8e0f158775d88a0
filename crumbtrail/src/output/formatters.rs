//! Output formatter implementations.

use crate::{BreadcrumbItem, Error, Result};

use super::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, items: &[BreadcrumbItem]) -> Result<String> {
        serde_json::to_string_pretty(items).map_err(|e| Error::Serialization {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, items: &[BreadcrumbItem]) -> Result<String> {
        serde_yaml::to_string(items)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| Error::Serialization {
                format: "yaml".to_string(),
                message: e.to_string(),
            })
    }
}

/// Formatter for human-readable output.
///
/// One line per item; the current item is marked with `*`.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, items: &[BreadcrumbItem]) -> Result<String> {
        if items.is_empty() {
            return Ok("No breadcrumbs.".to_string());
        }

        let width = items.iter().map(|item| item.to.len()).max().unwrap_or(0);
        let lines: Vec<String> = items
            .iter()
            .map(|item| {
                let marker = if item.current { '*' } else { ' ' };
                let label = if item.is_unlabeled() {
                    "(empty)"
                } else {
                    item.label.as_str()
                };
                format!("{marker} {:<width$}  {label}", item.to)
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Formatter for a single-line trail such as `Home > Docs > Installation`.
///
/// Items without a label are skipped.
pub struct TextFormatter {
    separator: String,
}

impl TextFormatter {
    /// Create a text formatter with a custom separator.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(" > ")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, items: &[BreadcrumbItem]) -> Result<String> {
        Ok(items
            .iter()
            .filter(|item| !item.is_unlabeled())
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator))
    }
}
