//! Command to validate a crumbtrail configuration file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use crumbtrail::config::{Config, ConfigLoader, ConfigValidator};
use std::path::{Path, PathBuf};

/// Validate a crumbtrail configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to the discovered configuration)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = match &self.config_path {
            Some(path) => Self::load_single(path)?,
            None => load_configuration(global)
                .map_err(|e| CliError::SemanticFailure(format!("Validation failed: {e}")))?,
        };

        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        let routes = config.route_table()?;
        let catalog = config.catalog()?;
        println!("Configuration is valid");
        if !global.quiet {
            println!("  routes:  {}", routes.len());
            println!("  locales: {}", catalog.locales().join(", "));
        }
        Ok(())
    }

    fn load_single(path: &Path) -> Result<Config, CliError> {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        ConfigLoader::load_file(path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".to_string())
        })
    }
}
