//! Route path normalization.
//!
//! Paths handed to the resolver come straight from a host's navigation
//! state and may be sloppy: empty, missing the leading separator, carrying
//! doubled or trailing separators, or still holding a query string. This
//! module turns any of those into the canonical absolute form the prefix
//! chain is built from. Normalization never fails.

/// The root route path.
pub const ROOT: &str = "/";

/// Iterate over the non-empty `/`-delimited segments of a path.
///
/// Query strings and fragments are not stripped here; use
/// [`normalize_route_path`] first when the input is untrusted.
///
/// # Examples
///
/// ```
/// use crumbtrail::path::normalize::segments;
///
/// let parts: Vec<_> = segments("//docs///seo-utils/").collect();
/// assert_eq!(parts, ["docs", "seo-utils"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Drop the query string and fragment from a path, if present.
///
/// Input must be a router path. Everything from the first `?` or `#` on is
/// dropped, so a raw fragment such as `#intro/x` reduces to the empty path.
///
/// # Examples
///
/// ```
/// use crumbtrail::path::normalize::strip_query;
///
/// assert_eq!(strip_query("/docs?page=2#intro"), "/docs");
/// assert_eq!(strip_query("/docs#intro"), "/docs");
/// assert_eq!(strip_query("/docs"), "/docs");
/// ```
#[must_use]
pub fn strip_query(path: &str) -> &str {
    match path.find(&['?', '#'][..]) {
        Some(index) => &path[..index],
        None => path,
    }
}

/// Normalize a route path to its canonical absolute form.
///
/// The result:
/// - is `/` for empty or whitespace-only input,
/// - has no query string or fragment,
/// - starts with exactly one `/`, has no repeated separators and no trailing `/`.
///
/// # Examples
///
/// ```
/// use crumbtrail::normalize_route_path;
///
/// assert_eq!(normalize_route_path(""), "/");
/// assert_eq!(normalize_route_path("docs//seo-utils/"), "/docs/seo-utils");
/// assert_eq!(normalize_route_path("/about?ref=nav"), "/about");
/// ```
#[must_use]
pub fn normalize_route_path(path: &str) -> String {
    let path = strip_query(path.trim());

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in segments(path) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push_str(ROOT);
    }
    normalized
}

/// Check whether a path is already in normalized form.
#[must_use]
pub fn is_normalized(path: &str) -> bool {
    normalize_route_path(path) == path
}
