//! High-level configuration structure for rooms builds.
//!
//! This module provides the main `RoomsConfig` struct and layered loading.
//! For file discovery, see the `discovery` module.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base_paths::{BasePathPair, BasePaths};
use crate::build::{
    AssetOptions, EntryTemplates, ReplaceOptions, default_entries, default_external_suffix,
};
use crate::discovery::{ConfigDiscovery, PACKAGE_JSON};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::EnvironmentMode;
use crate::settings::GlobalSettings;

/// Prefix for environment overrides (`ROOMS_ASSETS__LIMIT=2048`).
pub const ENV_PREFIX: &str = "ROOMS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoomsConfig {
    /// Logical entry names, in build order
    #[serde(default = "default_entries")]
    pub entries: Vec<String>,

    /// Source and output path templates
    #[serde(default)]
    pub templates: EntryTemplates,

    /// Appended to the component base path to form the external runtime URL
    #[serde(default = "default_external_suffix")]
    pub external_suffix: String,

    #[serde(default)]
    pub replace: ReplaceOptions,

    #[serde(default)]
    pub assets: AssetOptions,

    #[serde(default)]
    pub base_paths: BasePaths,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            templates: EntryTemplates::default(),
            external_suffix: default_external_suffix(),
            replace: ReplaceOptions::default(),
            assets: AssetOptions::default(),
            base_paths: BasePaths::default(),
            settings: GlobalSettings::default(),
        }
    }
}

impl RoomsConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rooms_config::RoomsConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entries": ["lobby"],
    ///     "assets": { "limit": 2048 }
    /// });
    ///
    /// let config = RoomsConfig::from_value(value).unwrap();
    /// assert_eq!(config.entries, vec!["lobby".to_string()]);
    /// assert_eq!(config.assets.limit, 2048);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Load configuration from multiple sources.
    ///
    /// Priority: `ROOMS_*` environment variables > config file > defaults.
    /// Without `config_path`, the file is discovered under `root`; a missing
    /// file is not an error.
    pub fn load(root: impl AsRef<Path>, config_path: Option<&Path>) -> ConfigResult<Self> {
        let root = root.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                let path = root.join(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound { path });
                }
                Some(path)
            }
            None => ConfigDiscovery::new(root).find(),
        };

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
                let value = ConfigDiscovery::read_package_field(&path)?;
                figment = figment.merge(Serialized::defaults(value));
            } else {
                figment = figment.merge(Toml::file(path));
            }
        }

        // ROOMS_ASSETS__LIMIT -> assets.limit
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Read the mode indicator named by `settings.mode_variable`.
    pub fn mode_from_env(&self) -> EnvironmentMode {
        EnvironmentMode::from_env_var(&self.settings.mode_variable)
    }

    /// Active base path pair for a mode.
    pub fn base_paths_for(&self, mode: EnvironmentMode) -> &BasePathPair {
        self.base_paths.select(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "entries": ["index"],
            "external_suffix": "dist/runtime.js"
        });

        let config = RoomsConfig::from_value(value).unwrap();
        assert_eq!(config.entries, vec!["index".to_string()]);
        assert_eq!(config.external_suffix, "dist/runtime.js");
        assert_eq!(config.templates, EntryTemplates::default());
    }

    #[test]
    fn from_value_rejects_wrong_types() {
        let result = RoomsConfig::from_value(json!({ "entries": "index" }));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn to_value_serializes_config() {
        let config = RoomsConfig::default();
        let value = config.to_value().unwrap();
        assert_eq!(value["assets"]["limit"], json!(1000));
        assert_eq!(value["entries"], json!(["index", "main-room"]));
    }

    #[test]
    fn partial_base_paths_keep_other_mode() {
        let value = json!({
            "base_paths": {
                "production": {
                    "component_base_path": "https://cdn.example.com/apps/",
                    "server_base_path": "https://cdn.example.com/assets/"
                }
            }
        });

        let config = RoomsConfig::from_value(value).unwrap();
        assert_eq!(
            config.base_paths_for(EnvironmentMode::Development),
            &BasePathPair::development()
        );
        assert_eq!(
            config
                .base_paths_for(EnvironmentMode::Production)
                .component_base_path,
            "https://cdn.example.com/apps/"
        );
    }
}
