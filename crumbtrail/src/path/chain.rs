//! Cumulative prefix chains.
//!
//! A prefix chain walks a path's segments outward from the root:
//! `/a/b/c` yields `/`, `/a`, `/a/b`, `/a/b/c`. The root is always the
//! first entry, even when the path itself is `/`.

use std::fmt;

use super::normalize::{normalize_route_path, ROOT};

/// One entry of a [`PrefixChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// The cumulative path up to and including this segment.
    pub path: &'a str,
    /// The last segment of `path` (empty for the root prefix).
    pub segment: &'a str,
    /// Whether this prefix equals the full path the chain was built from.
    pub is_last: bool,
}

impl Prefix<'_> {
    /// Returns true for the root prefix `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segment.is_empty()
    }
}

/// The ordered cumulative prefixes of a normalized path.
///
/// # Examples
///
/// ```
/// use crumbtrail::PrefixChain;
///
/// let chain = PrefixChain::new("/a//b/c/");
/// let paths: Vec<_> = chain.prefixes().map(|p| p.path).collect();
/// assert_eq!(paths, ["/", "/a", "/a/b", "/a/b/c"]);
/// assert_eq!(chain.len(), 4);
/// assert_eq!(chain.leaf(), "/a/b/c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixChain {
    path: String,
    /// Byte offset where each non-root prefix ends.
    ends: Vec<usize>,
}

impl PrefixChain {
    /// Build the chain for `path`, normalizing it first.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let path = normalize_route_path(path);
        let mut ends: Vec<usize> = path
            .match_indices('/')
            .map(|(index, _)| index)
            .skip(1)
            .collect();
        if path != ROOT {
            ends.push(path.len());
        }
        Self { path, ends }
    }

    /// The normalized full path.
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.path
    }

    /// Number of prefixes, root included. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len() + 1
    }

    /// A chain always holds the root, so it is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The non-empty segments of the path, root excluded.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        super::normalize::segments(&self.path)
    }

    /// Iterate over every prefix, root first.
    pub fn prefixes(&self) -> impl Iterator<Item = Prefix<'_>> + '_ {
        let last = self.ends.len();
        let root = Prefix {
            path: ROOT,
            segment: "",
            is_last: last == 0,
        };

        let mut start = 0;
        let rest = self.ends.iter().enumerate().map(move |(index, &end)| {
            let path = &self.path[..end];
            let segment = &self.path[start + 1..end];
            start = end;
            Prefix {
                path,
                segment,
                is_last: index + 1 == last,
            }
        });

        std::iter::once(root).chain(rest)
    }
}

impl fmt::Display for PrefixChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
