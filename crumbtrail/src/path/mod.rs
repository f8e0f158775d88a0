//! Route path handling.
//!
//! This module turns a raw current path into the chain of ancestor paths
//! the resolver walks.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts a path to canonical absolute form by:
//! - Treating empty input as the root `/`
//! - Dropping any query string or fragment
//! - Collapsing repeated separators and dropping a trailing one
//!
//! ## Prefix chains
//!
//! A [`PrefixChain`] lists the cumulative prefixes of a normalized path,
//! root first. Each [`Prefix`] carries its path, its last segment and
//! whether it is the full path.
//!
//! # Examples
//!
//! ```
//! use crumbtrail::path::{normalize_route_path, PrefixChain};
//!
//! assert_eq!(normalize_route_path("docs//intro/"), "/docs/intro");
//!
//! let chain = PrefixChain::new("/docs/intro");
//! let last = chain.prefixes().last().unwrap();
//! assert_eq!(last.segment, "intro");
//! assert!(last.is_last);
//! ```

pub mod chain;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use chain::{Prefix, PrefixChain};
pub use normalize::normalize_route_path;
