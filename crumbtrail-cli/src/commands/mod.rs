//! CLI command implementations.
//!
//! - `resolve`: Print the breadcrumb trail for a path
//! - `match_route`: Show the route chain a path matches
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completions

pub mod completions;
pub mod match_route;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use match_route::MatchCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
