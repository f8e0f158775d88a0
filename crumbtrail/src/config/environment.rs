//! Environment variable handling for configuration overrides.
//!
//! `CRUMBTRAIL_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::Result;
use crate::output::OutputFormat;
use std::env;

/// Overrides the active locale.
pub const LOCALE_ENV: &str = "CRUMBTRAIL_LOCALE";
/// Overrides the fallback locale.
pub const FALLBACK_LOCALE_ENV: &str = "CRUMBTRAIL_FALLBACK_LOCALE";
/// Overrides the root label.
pub const ROOT_LABEL_ENV: &str = "CRUMBTRAIL_ROOT_LABEL";
/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "CRUMBTRAIL_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crumbtrail::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `CRUMBTRAIL_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(locale) = Self::read(LOCALE_ENV) {
            config.locale = Some(locale);
        }

        if let Some(locale) = Self::read(FALLBACK_LOCALE_ENV) {
            config.fallback_locale = Some(locale);
        }

        if let Some(label) = Self::read(ROOT_LABEL_ENV) {
            config.root_label = Some(label);
        }

        if let Some(format) = Self::read(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse::<OutputFormat>()?);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        let value = env::var(name).ok().filter(|v| !v.trim().is_empty())?;
        log::debug!("{name} overrides configuration");
        Some(value)
    }
}
