//! Output formatting module for breadcrumb trails.
//!
//! This module serializes a resolved trail for display or for hand-off to
//! another tool: JSON and YAML for machines, a per-line listing and a
//! single-line trail for humans. Rendering markup stays with the host.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BreadcrumbItem, Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for formatting breadcrumb trails into different output formats.
pub trait OutputFormatter {
    /// Format the given trail into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, items: &[BreadcrumbItem]) -> Result<String>;
}

/// Available output formats for breadcrumb trails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per item, current item marked.
    #[default]
    Human,
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
    /// Single line joined with a separator.
    Text,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Text => Box::new(TextFormatter::default()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "text" => Ok(Self::Text),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown output format '{s}' (expected human, json, yaml or text)"),
            }),
        }
    }
}
