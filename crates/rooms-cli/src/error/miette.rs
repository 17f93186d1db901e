//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use rooms_config::ConfigError;

/// Convert a `CliError` into a miette report for the terminal.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundle(e) => Report::new(e),
        CliError::Config(e) => config_error_to_miette(e),
        other => miette::miette!("{}", other),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::EntryNotFound { path } => miette::miette!(
            help = "Create the module or remove the entry from `entries`",
            "Entry source not found: {}",
            path.display()
        ),
        ConfigError::FileNotFound { path } => miette::miette!(
            help = "Check the --config path; it is resolved against --cwd",
            "Config file not found: {}",
            path.display()
        ),
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid configuration: {}", message),
        other => miette::miette!("Configuration error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn entry_not_found_keeps_path() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::EntryNotFound {
            path: PathBuf::from("src/rooms/lobby.ts"),
        }));
        assert!(report.to_string().contains("src/rooms/lobby.ts"));
    }

    #[test]
    fn bundle_errors_keep_their_diagnostic() {
        let report = cli_error_to_miette(CliError::Bundle(
            rooms_bundler::Error::InvalidOutputPath("../escape.js".to_string()),
        ));
        assert!(report.to_string().contains("../escape.js"));
    }

    #[test]
    fn other_errors_use_display() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".to_string()));
        assert_eq!(report.to_string(), "Invalid argument: bad");
    }
}
