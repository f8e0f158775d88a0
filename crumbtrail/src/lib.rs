#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crumbtrail
//!
//! A library for deriving breadcrumb trails from URL paths.
//!
//! Given the current path of an application, a [`Router`] able to match
//! paths to route records and an optional [`Translator`], the resolver
//! produces one [`BreadcrumbItem`] per ancestor path, root first.
//!
//! ## Core Types
//!
//! - [`BreadcrumbResolver`] and [`ResolverOptions`]: the resolution algorithm
//! - [`Router`], [`Translator`] and [`RouteRecord`]: collaborator seams
//! - [`PrefixChain`]: the cumulative prefixes of a path
//! - [`RouteTable`] and [`MessageCatalog`]: static collaborator implementations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use crumbtrail::{resolve_breadcrumbs, RouteDefinition, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteDefinition::new("index", "/").with_title("Home"),
//!     RouteDefinition::new("docs-slug", "/docs/:slug(.*)*"),
//! ])
//! .unwrap();
//!
//! let trail = resolve_breadcrumbs("/docs/getting-started", &table, None).unwrap();
//! let labels: Vec<_> = trail.iter().map(|item| item.label.as_str()).collect();
//! assert_eq!(labels, ["Home", "Docs", "Getting Started"]);
//! assert!(trail[2].current);
//! ```

pub mod breadcrumb;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolver;
pub mod router;
pub mod routes;

// Re-export key types at crate root for convenience
pub use breadcrumb::{title_case_segment, BreadcrumbItem};
pub use catalog::MessageCatalog;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use locale::{strip_locale_suffix, LocaleSuffix};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{normalize_route_path, Prefix, PrefixChain};
pub use resolver::{resolve_breadcrumbs, BreadcrumbResolver, ResolverOptions};
pub use router::{FnRouter, FnTranslator, Passthrough, RouteRecord, Router, Translator};
pub use routes::{RouteDefinition, RouteTable};
