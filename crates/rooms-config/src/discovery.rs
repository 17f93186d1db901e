//! File-based config discovery for CLI use
//!
//! Handles finding and loading rooms configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::RoomsConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "rooms.toml";
pub(crate) const PACKAGE_JSON: &str = "package.json";
const PACKAGE_FIELD: &str = "rooms";

/// File-based configuration discovery
///
/// Searches for rooms configuration files in conventional locations and loads them.
/// Library users should prefer `RoomsConfig::from_value()` or `RoomsConfig::load()`.
///
/// # Example
///
/// ```no_run
/// use rooms_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: rooms.toml
    /// 2. package.json (rooms field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<RoomsConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config from discovered file, or the built-in defaults if none exists
    pub fn load_or_default(&self) -> Result<RoomsConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => Ok(RoomsConfig::default()),
        }
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<RoomsConfig> {
        if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            let value = Self::read_package_field(path)?;
            return RoomsConfig::from_value(value);
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        RoomsConfig::from_value(value)
    }

    /// Extract the `rooms` field of a package.json
    pub(crate) fn read_package_field(path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: PACKAGE_JSON.to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        match parsed.get(PACKAGE_FIELD) {
            Some(value) if !value.is_null() => Ok(value.clone()),
            Some(_) => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("The 'rooms' field cannot be null".to_string()),
            }),
            None => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("Add a 'rooms' field to your package.json".to_string()),
            }),
        }
    }
}

/// Discover and load config from current directory (convenience function)
///
/// Falls back to defaults when no config file exists.
pub fn discover() -> Result<RoomsConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}
