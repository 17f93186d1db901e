//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry source not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("invalid config value for '{field}'{}", .hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("invalid entry name '{name}': {reason}")]
    InvalidEntryName { name: String, reason: String },

    #[error("entry '{0}' is listed more than once")]
    DuplicateEntry(String),

    #[error("template '{field}' must contain the {{name}} placeholder (got '{template}')")]
    InvalidTemplate { field: String, template: String },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
