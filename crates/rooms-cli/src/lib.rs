//! Rooms CLI - build plans for browser room bundles.
//!
//! This crate provides the `rooms` command-line interface on top of
//! `rooms-config` and `rooms-bundler`.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `plan`, `check` and `schema` implementations
//! - [`error`] - CLI error type with hints and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and plan formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use rooms_cli::{cli::PlanArgs, commands, error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, None, false);
//!     commands::plan_execute(PlanArgs::default())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
