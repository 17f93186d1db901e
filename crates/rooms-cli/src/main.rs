//! Rooms CLI - build plans for browser room bundles.
//!
//! This is the main entry point for the rooms CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use rooms_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = args
        .config_location()
        .and_then(|(cwd, config)| commands::configured_log_level(cwd, config));
    logger::init_logger(args.verbose, args.quiet, log_level.as_deref(), args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    result.map_err(error::cli_error_to_miette)
}
