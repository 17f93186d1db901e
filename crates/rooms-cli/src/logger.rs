//! Logging setup for the rooms CLI.
//!
//! Uses the `tracing` ecosystem. Verbosity comes from `--verbose`/`--quiet`,
//! then `RUST_LOG`, then the `settings.log_level` value of the loaded config.
//!
//! # Example
//!
//! ```rust,no_run
//! use rooms_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, None, false);
//! info!("generating plan");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 4] = ["rooms", "rooms_cli", "rooms_bundler", "rooms_config"];

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Build an `EnvFilter` directive string that applies `level` to every rooms crate.
///
/// ```
/// use rooms_cli::logger::crate_directives;
///
/// assert_eq!(
///     crate_directives("debug"),
///     "rooms=debug,rooms_cli=debug,rooms_bundler=debug,rooms_config=debug"
/// );
/// ```
pub fn crate_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Directives for a configured `settings.log_level`.
///
/// Only plain level names are accepted (case-insensitive); anything else
/// yields `None` and the default applies.
///
/// ```
/// use rooms_cli::logger::{configured_directives, crate_directives};
///
/// assert_eq!(configured_directives("Warn"), Some(crate_directives("warn")));
/// assert_eq!(configured_directives("loud"), None);
/// ```
pub fn configured_directives(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS
        .contains(&level.as_str())
        .then(|| crate_directives(&level))
}

/// Pick the filter for the given flags and configured level.
///
/// Order: `--verbose`, `--quiet`, `RUST_LOG`, `settings.log_level`, then `info`.
pub fn filter_for(verbose: bool, quiet: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(crate_directives("debug"));
    }
    if quiet {
        return EnvFilter::new(crate_directives("error"));
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directives = configured
        .and_then(configured_directives)
        .unwrap_or_else(|| crate_directives("info"));
    EnvFilter::new(directives)
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before anything logs. Later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool, configured: Option<&str>, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet, configured), no_color);
}

/// Initialize the subscriber with an explicit filter.
///
/// ```rust,no_run
/// use rooms_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("rooms_bundler=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // try_init: tests and embedders may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
