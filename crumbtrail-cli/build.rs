//! Build script for crumbtrail-cli.
//!
//! Generates the man page into OUT_DIR with clap_mangen. The command
//! structure is declared here because a build script cannot depend on the
//! crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("crumbtrail")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive breadcrumb trails from URL paths")
        .long_about(
            "Command-line tool that resolves a URL path against a declarative route table \
             and message catalog and prints the resulting breadcrumb trail",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this configuration file instead of discovering crumbtrail.yaml")
                .value_name("PATH")
                .global(true)
                .env("CRUMBTRAIL_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the breadcrumb trail for a path")
                .long_about("Resolve a path into one breadcrumb item per ancestor, root first"),
            Command::new("match")
                .about("Show the route chain a path matches")
                .long_about("Print the configured routes matching a path, ancestors first"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check routes, messages and options of a crumbtrail configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("create man directory");

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("render man page");

    fs::write(man_dir.join("crumbtrail.1"), buffer).expect("write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
