use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;
use crate::cli::validation::parse_entry_name;

/// Available rooms subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the build plan
    ///
    /// Reads the environment indicator (BUILD by default), selects the
    /// matching base path pair, and prints one job per entry name.
    Plan(PlanArgs),

    /// Validate configuration and entry sources
    ///
    /// Checks rooms.toml (or the `rooms` field of package.json) and verifies
    /// that every entry's source module exists.
    Check(CheckArgs),

    /// Print the JSON schema for rooms.toml
    Schema(SchemaArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Override the environment instead of reading the indicator variable
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Entry names to plan, replacing the configured list
    ///
    /// Examples:
    ///   rooms plan --entry lobby --entry gallery
    #[arg(short, long = "entry", value_name = "NAME", value_parser = parse_entry_name)]
    pub entries: Vec<String>,

    /// Path to the config file (relative to --cwd)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Print the plan as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Write the JSON plan to a file
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Environment to report base paths for instead of reading the indicator
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to the config file (relative to --cwd)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Only validate the schema, skip filesystem checks
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Write the schema to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}
