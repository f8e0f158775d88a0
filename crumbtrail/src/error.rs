//! Error types for the crumbtrail library.
//!
//! Resolution itself never fails on its own account: unmatched paths and
//! missing translations are data. The variants here cover configuration,
//! route table construction, output serialization, and failures reported
//! by host-supplied collaborators.

use thiserror::Error;

/// Result type alias for operations that may fail with a crumbtrail error.
///
/// # Examples
///
/// ```
/// use crumbtrail::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/docs".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crumbtrail library.
#[derive(Debug, Error)]
pub enum Error {
    /// A route pattern could not be compiled.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidRoute {
        /// The offending pattern.
        pattern: String,
        /// The reason the pattern is invalid.
        reason: String,
    },

    /// Two route definitions share the same name.
    #[error("duplicate route name '{name}'")]
    DuplicateRoute {
        /// The duplicated route name.
        name: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A breadcrumb trail could not be serialized.
    #[error("failed to serialize to {format}: {message}")]
    Serialization {
        /// The output format being produced.
        format: String,
        /// Details from the serializer.
        message: String,
    },

    /// A host router failed while matching a path.
    #[error("router failed for '{path}': {reason}")]
    Router {
        /// The path being resolved.
        path: String,
        /// The reason reported by the router.
        reason: String,
    },

    /// A host translator failed while looking up a key.
    #[error("translator failed for '{key}': {reason}")]
    Translator {
        /// The translation key being looked up.
        key: String,
        /// The reason reported by the translator.
        reason: String,
    },
}

impl Error {
    /// Check if the error was raised by a host collaborator.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbtrail::Error;
    ///
    /// let err = Error::Router { path: "/".into(), reason: "offline".into() };
    /// assert!(err.is_collaborator());
    /// ```
    #[must_use]
    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Router { .. } | Self::Translator { .. })
    }
}
