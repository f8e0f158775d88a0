//! Utility functions for CLI operations.

use crate::error::CliError;
use crumbtrail::config::ConfigValidator;
use crumbtrail::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// With `--config` only that file is read; otherwise files are discovered
/// from the current directory. Environment overrides apply either way.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Check a locale given on the command line.
pub fn check_locale(locale: &str) -> Result<(), CliError> {
    ConfigValidator::validate_locale("--locale", locale)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}
