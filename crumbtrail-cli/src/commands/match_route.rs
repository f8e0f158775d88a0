//! Match command implementation.
//!
//! Shows which configured route a path resolves to, ancestors first.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use crumbtrail::normalize_route_path;

/// Show the route chain a path matches
#[derive(Args)]
pub struct MatchCommand {
    /// Path to match
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl MatchCommand {
    /// Execute the match command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let table = config.route_table()?;
        let path = normalize_route_path(&self.path);

        let Some(chain) = table.find(&path).filter(|records| !records.is_empty()) else {
            return Err(CliError::SemanticFailure(format!("no match for {path}")));
        };

        let width = chain
            .iter()
            .map(|record| record.name.as_deref().unwrap_or("-").len())
            .max()
            .unwrap_or(0);

        for record in &chain {
            let name = record.name.as_deref().unwrap_or("-");
            match &record.title {
                Some(title) => println!("{name:<width$}  {}  ({title})", record.path),
                None => println!("{name:<width$}  {}", record.path),
            }
        }

        Ok(())
    }
}
