//! Command implementations for the rooms CLI.
//!
//! - [`plan`] - Generate the build plan
//! - [`check`] - Validate configuration and entry sources
//! - [`schema`] - Print the config JSON schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod plan;
pub mod schema;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
pub use schema::execute as schema_execute;
pub use utils::configured_log_level;
