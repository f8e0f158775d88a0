//! Breadcrumb items and label derivation.

use serde::{Deserialize, Serialize};

/// One entry of a breadcrumb trail.
///
/// Items are produced root first; their position in the trail is their only
/// identity. Serialized field names follow the usual front-end shape
/// (`to`, `label`, `ariaLabel`, `current`).
///
/// # Examples
///
/// ```
/// use crumbtrail::BreadcrumbItem;
///
/// let item = BreadcrumbItem::new("/docs", "Docs", true);
/// assert_eq!(item.aria_label, "Docs");
/// assert!(item.current);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    /// Destination path of this item.
    pub to: String,
    /// Display label.
    pub label: String,
    /// Accessibility label, identical to `label` unless a caller overrides it.
    pub aria_label: String,
    /// True only for the item matching the full current path.
    pub current: bool,
}

impl BreadcrumbItem {
    /// Create an item whose accessibility label mirrors its display label.
    #[must_use]
    pub fn new(to: impl Into<String>, label: impl Into<String>, current: bool) -> Self {
        let label = label.into();
        Self {
            to: to.into(),
            aria_label: label.clone(),
            label,
            current,
        }
    }

    /// Returns true when the item has nothing to display.
    #[must_use]
    pub fn is_unlabeled(&self) -> bool {
        self.label.is_empty()
    }
}

/// Derive a display label from a path segment.
///
/// The segment is split on `-`, the first character of every word is
/// upper-cased and the words are joined with single spaces. Nothing else
/// about the text changes.
///
/// # Examples
///
/// ```
/// use crumbtrail::title_case_segment;
///
/// assert_eq!(title_case_segment("seo-utils"), "Seo Utils");
/// assert_eq!(title_case_segment("getting-started"), "Getting Started");
/// assert_eq!(title_case_segment("subpath"), "Subpath");
/// ```
#[must_use]
pub fn title_case_segment(segment: &str) -> String {
    let mut label = String::with_capacity(segment.len());
    for (index, word) in segment.split('-').enumerate() {
        if index > 0 {
            label.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
    }
    label
}
