//! Shared helpers for command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use rooms_config::RoomsConfig;

use crate::error::{CliError, Result, ResultExt};

/// Resolve the project root: `--cwd` if given, else the current directory.
pub fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    match cwd {
        Some(dir) => {
            let root = resolve_path(dir, &current);
            if !root.is_dir() {
                return Err(CliError::FileNotFound(root));
            }
            Ok(root)
        }
        None => Ok(current),
    }
}

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Load the layered configuration for a project root.
pub fn load_config(root: &Path, config: Option<&Path>) -> Result<RoomsConfig> {
    let config = RoomsConfig::load(root, config)?;
    tracing::debug!(entries = config.entries.len(), "configuration loaded");
    Ok(config)
}

/// The configured `settings.log_level`, if the configuration loads.
///
/// Runs before the logger exists, so failures stay silent here and surface
/// when the command loads the configuration itself.
pub fn configured_log_level(cwd: Option<&Path>, config: Option<&Path>) -> Option<String> {
    let root = project_root(cwd).ok()?;
    RoomsConfig::load(&root, config).ok()?.settings.log_level
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(path, contents).with_path(path)?;
    Ok(())
}
