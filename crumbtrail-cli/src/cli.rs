//! CLI structure and command definitions.

use crate::commands::{CompletionsCommand, MatchCommand, ResolveCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for deriving breadcrumb trails from URL paths.
#[derive(Parser)]
#[command(name = "crumbtrail")]
#[command(version, about = "Derive breadcrumb trails from URL paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of discovering crumbtrail.yaml
    #[arg(long, value_name = "PATH", global = true, env = "CRUMBTRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the breadcrumb trail for a path
    Resolve(ResolveCommand),

    /// Show the route chain a path matches
    Match(MatchCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
