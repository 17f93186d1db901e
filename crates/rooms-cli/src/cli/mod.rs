//! Command-line interface definition for the rooms CLI.
//!
//! # Command Structure
//!
//! - `rooms plan` - Generate the build plan for the active environment
//! - `rooms check` - Validate configuration and entry sources
//! - `rooms schema` - Print the JSON schema of `rooms.toml`

mod commands;
pub mod enums;
mod validation;

use std::path::Path;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs, SchemaArgs};
pub use enums::*;
pub use validation::parse_entry_name;

/// Rooms - build plans for browser room bundles
#[derive(Parser, Debug)]
#[command(
    name = "rooms",
    version,
    about = "Build plans for browser room bundles",
    long_about = "Rooms turns a list of room entry names into bundling jobs.\n\
                  Each job produces a debug and a minified ES module, loads the shared\n\
                  hubs.js runtime as an external, and rewrites component URLs for the\n\
                  active environment (BUILD=production selects production paths)."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The `--cwd` and `--config` of commands that read `rooms.toml`.
    pub fn config_location(&self) -> Option<(Option<&Path>, Option<&Path>)> {
        match &self.command {
            Command::Plan(args) => Some((args.cwd.as_deref(), args.config.as_deref())),
            Command::Check(args) => Some((args.cwd.as_deref(), args.config.as_deref())),
            Command::Schema(_) => None,
        }
    }
}
