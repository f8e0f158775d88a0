//! Route path patterns.
//!
//! Supported segment forms:
//!
//! | Form                                | Matches                      |
//! |-------------------------------------|------------------------------|
//! | `docs`                              | exactly `docs`               |
//! | `:slug`                             | any one segment              |
//! | `:slug?`                            | zero or one segment          |
//! | `*`, `:slug*`, `:slug(.*)*`         | the rest, zero or more       |
//! | `:slug+`, `:slug(.*)`, `:slug(.*)+` | the rest, one or more        |
//!
//! Catch-all segments must come last.

use std::fmt;

use crate::error::{Error, Result};
use crate::path::normalize::segments;

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal segment, compared case-sensitively.
    Literal(String),
    /// A named parameter matching exactly one segment.
    Param(String),
    /// A named parameter matching zero or one segment.
    Optional(String),
    /// Matches all remaining segments; `min` is 0 or 1.
    CatchAll {
        /// Parameter name (`*` for the anonymous form).
        name: String,
        /// Minimum number of segments consumed.
        min: usize,
    },
}

/// A compiled route path pattern.
///
/// # Examples
///
/// ```
/// use crumbtrail::routes::RoutePattern;
///
/// let pattern = RoutePattern::parse("/docs/:slug(.*)*").unwrap();
/// assert!(pattern.matches(&["docs"]));
/// assert!(pattern.matches(&["docs", "seo-utils", "installation"]));
/// assert!(!pattern.matches(&["blog"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] for malformed parameters, custom
    /// parameter regexes, or a catch-all that is not the last segment.
    pub fn parse(pattern: &str) -> Result<Self> {
        let parts: Vec<&str> = segments(pattern).collect();
        let mut compiled = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let segment = parse_segment(pattern, part)?;
            if matches!(segment, Segment::CatchAll { .. }) && index + 1 != parts.len() {
                return Err(invalid(pattern, "catch-all must be the last segment"));
            }
            compiled.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments: compiled,
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern matches the whole of `path`'s segments.
    #[must_use]
    pub fn matches(&self, path: &[&str]) -> bool {
        match_from(&self.segments, path)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn match_from(pattern: &[Segment], path: &[&str]) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    match head {
        Segment::Literal(literal) => {
            path.first() == Some(&literal.as_str()) && match_from(rest, &path[1..])
        }
        Segment::Param(_) => !path.is_empty() && match_from(rest, &path[1..]),
        Segment::Optional(_) => {
            match_from(rest, path) || (!path.is_empty() && match_from(rest, &path[1..]))
        }
        Segment::CatchAll { min, .. } => path.len() >= *min,
    }
}

fn parse_segment(pattern: &str, part: &str) -> Result<Segment> {
    if part == "*" {
        return Ok(Segment::CatchAll {
            name: "*".to_string(),
            min: 0,
        });
    }

    let Some(param) = part.strip_prefix(':') else {
        if part.contains(['(', ')', ':'].as_slice()) {
            return Err(invalid(pattern, &format!("unexpected characters in '{part}'")));
        }
        return Ok(Segment::Literal(part.to_string()));
    };

    let (name, regex, modifier) = split_param(param);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(pattern, &format!("invalid parameter name in '{part}'")));
    }
    let name = name.to_string();

    match (regex, modifier) {
        (None, None) => Ok(Segment::Param(name)),
        (None, Some('?')) => Ok(Segment::Optional(name)),
        (None | Some(".*"), Some('*')) => Ok(Segment::CatchAll { name, min: 0 }),
        (None, Some('+')) | (Some(".*"), None | Some('+')) => {
            Ok(Segment::CatchAll { name, min: 1 })
        }
        (Some(".*"), Some('?')) => Err(invalid(
            pattern,
            &format!("optional catch-all '{part}' is ambiguous; use '*'"),
        )),
        (Some(other), _) => Err(invalid(
            pattern,
            &format!("custom parameter regex '({other})' is not supported"),
        )),
        (None, Some(other)) => Err(invalid(
            pattern,
            &format!("unknown parameter modifier '{other}'"),
        )),
    }
}

/// Split `name(regex)modifier` into its parts.
fn split_param(param: &str) -> (&str, Option<&str>, Option<char>) {
    let (head, modifier) = match param.chars().last() {
        Some(c @ ('?' | '*' | '+')) => (&param[..param.len() - 1], Some(c)),
        _ => (param, None),
    };

    match head.find('(') {
        Some(open) if head.ends_with(')') => {
            (&head[..open], Some(&head[open + 1..head.len() - 1]), modifier)
        }
        _ => (head, None, modifier),
    }
}

fn invalid(pattern: &str, reason: &str) -> Error {
    Error::InvalidRoute {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
