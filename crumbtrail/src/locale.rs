//! Locale suffix convention for route names.
//!
//! Localized routing setups register one route per locale and append the
//! locale to the route's logical name: `about___en`, `about___fr`. The
//! breadcrumb translation key must be built from the logical name, so the
//! suffix is stripped exactly once, here.

use serde::{Deserialize, Serialize};

/// Separator used by the default convention.
pub const DEFAULT_SEPARATOR: &str = "___";

/// A route-name locale suffix convention: `<name><separator><locale>`.
///
/// # Examples
///
/// ```
/// use crumbtrail::LocaleSuffix;
///
/// let convention = LocaleSuffix::default();
/// assert_eq!(convention.strip("about___en"), "about");
/// assert_eq!(convention.strip("about"), "about");
///
/// let custom = LocaleSuffix::new("--");
/// assert_eq!(custom.strip("about--de-AT"), "about");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleSuffix {
    separator: String,
}

impl LocaleSuffix {
    /// Create a convention with a custom separator.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator between logical name and locale.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Strip a trailing locale suffix from a route name.
    ///
    /// The name is cut at the last separator when what follows is a
    /// non-empty locale token (ASCII alphanumerics, `-` and `_`). Names
    /// without such a suffix are returned unchanged.
    #[must_use]
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        strip_with(&self.separator, name)
    }

    /// The locale carried by a route name, if any.
    ///
    /// ```
    /// use crumbtrail::LocaleSuffix;
    ///
    /// assert_eq!(LocaleSuffix::default().locale_of("index___fr"), Some("fr"));
    /// assert_eq!(LocaleSuffix::default().locale_of("index"), None);
    /// ```
    #[must_use]
    pub fn locale_of<'a>(&self, name: &'a str) -> Option<&'a str> {
        let logical = self.strip(name);
        if logical.len() == name.len() {
            return None;
        }
        Some(&name[logical.len() + self.separator.len()..])
    }
}

impl Default for LocaleSuffix {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

fn strip_with<'a>(separator: &str, name: &'a str) -> &'a str {
    if separator.is_empty() {
        return name;
    }
    match name.rfind(separator) {
        Some(index) if is_locale_token(&name[index + separator.len()..]) => &name[..index],
        _ => name,
    }
}

fn is_locale_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Strip a `___<locale>` suffix using the default convention.
///
/// # Examples
///
/// ```
/// use crumbtrail::strip_locale_suffix;
///
/// assert_eq!(strip_locale_suffix("about___en"), "about");
/// assert_eq!(strip_locale_suffix("docs-slug___zh-Hans"), "docs-slug");
/// assert_eq!(strip_locale_suffix("index"), "index");
/// ```
#[must_use]
pub fn strip_locale_suffix(name: &str) -> &str {
    strip_with(DEFAULT_SEPARATOR, name)
}
