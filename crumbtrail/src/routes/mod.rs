//! A static, declarative route table.
//!
//! Hosts with their own router implement [`crate::Router`] directly. The
//! table here covers hosts (and the CLI) that only have a route list in
//! configuration: literal segments, named parameters, optional parameters
//! and trailing catch-alls, with nested children.

pub mod pattern;
mod table;

pub use pattern::{RoutePattern, Segment};
pub use table::{RouteDefinition, RouteTable};
