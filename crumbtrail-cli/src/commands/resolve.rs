//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{check_locale, load_configuration, GlobalOptions};
use clap::Args;
use crumbtrail::{BreadcrumbResolver, OutputFormat, OutputFormatter, Translator};

/// Print the breadcrumb trail for a path
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve, e.g. /docs/getting-started
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format (human, json, yaml, text)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Active locale, overriding configuration
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Skip the message catalog and use fallback labels
    #[arg(long)]
    pub no_translate: bool,

    /// Label for a matched root route without a title
    #[arg(long, value_name = "LABEL")]
    pub root_label: Option<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;

        if let Some(locale) = self.locale {
            check_locale(&locale)?;
            config.locale = Some(locale);
        }
        if let Some(label) = self.root_label {
            config.root_label = Some(label);
        }

        let table = config.route_table()?;
        let resolver = BreadcrumbResolver::with_options(config.resolver_options());

        let catalog;
        let translator: Option<&dyn Translator> = if self.no_translate {
            None
        } else {
            catalog = config.catalog()?;
            Some(&catalog)
        };

        let trail = resolver.resolve(&self.path, &table, translator)?;

        let format = self
            .format
            .or(config.output_format)
            .unwrap_or(OutputFormat::Human);
        let output = format.create_formatter().format(&trail)?;
        println!("{output}");

        Ok(())
    }
}
