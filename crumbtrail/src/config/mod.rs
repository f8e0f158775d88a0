//! Configuration system for crumbtrail.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of locales, key parts, routes and messages
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CRUMBTRAIL_*`)
//! 3. Private project config (`crumbtrail.local.yaml`)
//! 4. Project config (`crumbtrail.yaml`)
//! 5. User config (`~/.crumbtrail/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use crumbtrail::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//! let routes = config.route_table().unwrap();
//! println!("{} routes", routes.len());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use crumbtrail::config::{Config, ConfigBuilder};
//! use crumbtrail::RouteDefinition;
//!
//! let custom = Config {
//!     routes: Some(vec![RouteDefinition::new("index", "/").with_title("Home")]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.route_table().unwrap().len(), 1);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
