//! Configuration validation.
//!
//! Checks the merged configuration before it is turned into a route table,
//! a catalog and resolver options.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found: a malformed locale tag,
    /// an empty key part, an invalid or duplicate route, or messages that
    /// are not mappings.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(locale) = &config.locale {
            Self::validate_locale("locale", locale)?;
        }

        if let Some(locale) = &config.fallback_locale {
            Self::validate_locale("fallback_locale", locale)?;
        }

        if let Some(messages) = &config.messages {
            for locale in messages.keys() {
                Self::validate_locale(&format!("messages.{locale}"), locale)?;
            }
        }

        if let Some(prefix) = &config.key_prefix {
            Self::validate_key_part("key_prefix", prefix)?;
        }

        if let Some(suffix) = &config.key_suffix {
            Self::validate_key_part("key_suffix", suffix)?;
        }

        if let Some(separator) = &config.locale_separator {
            if separator.is_empty() {
                return Err(Error::Validation {
                    field: "locale_separator".into(),
                    message: "Separator cannot be empty".into(),
                });
            }
        }

        // Building both surfaces pattern, duplicate and message-shape errors.
        config.route_table()?;
        config.catalog()?;

        Ok(())
    }

    /// Validate a locale tag such as `en`, `pt-BR` or `zh_Hant`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is empty or contains characters other
    /// than ASCII alphanumerics, `-` and `_`.
    pub fn validate_locale(field: &str, locale: &str) -> Result<()> {
        if locale.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Locale cannot be empty".into(),
            });
        }

        if !locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{locale}' is not a valid locale tag"),
            });
        }

        Ok(())
    }

    /// Validate one part of a translation key.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is empty, contains whitespace, or starts
    /// or ends with a `.`.
    pub fn validate_key_part(field: &str, part: &str) -> Result<()> {
        if part.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if part.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain whitespace".into(),
            });
        }

        if part.starts_with('.') || part.ends_with('.') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot start or end with '.'".into(),
            });
        }

        Ok(())
    }
}
