//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::Path;

use crate::build::NAME_PLACEHOLDER;
use crate::config::RoomsConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &RoomsConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// An empty entry list is valid and produces an empty plan.
///
/// # Example
///
/// ```
/// use rooms_config::{ConfigValidator, RoomsConfig, SchemaValidator};
///
/// SchemaValidator.validate(&RoomsConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &RoomsConfig) -> Result<()> {
        let mut seen = HashSet::new();
        for name in &config.entries {
            validate_entry_name(name)?;
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateEntry(name.clone()));
            }
        }

        for (field, template) in config.templates.fields() {
            if !template.contains(NAME_PLACEHOLDER) {
                return Err(ConfigError::InvalidTemplate {
                    field: field.to_string(),
                    template: template.to_string(),
                });
            }
        }

        if config.templates.debug_output == config.templates.minified_output {
            return Err(ConfigError::SchemaValidation {
                message: "debug and minified outputs would overwrite each other".to_string(),
                hint: Some("Use distinct templates, e.g. {name}.js and {name}.min.js".to_string()),
            });
        }

        if config.external_suffix.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "external_suffix cannot be empty".to_string(),
                hint: Some("The default is 'dist/hubs.js'".to_string()),
            });
        }

        if config.replace.search.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "replace.search cannot be empty".to_string(),
                hint: None,
            });
        }

        if config.assets.limit == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "assets.limit must be greater than 0".to_string(),
                hint: Some("A limit of 1 inlines only empty files".to_string()),
            });
        }

        for (mode, pair) in [
            ("development", &config.base_paths.development),
            ("production", &config.base_paths.production),
        ] {
            for (field, value) in [
                ("component_base_path", &pair.component_base_path),
                ("server_base_path", &pair.server_base_path),
            ] {
                if !value.ends_with('/') {
                    return Err(ConfigError::InvalidValue {
                        field: format!("base_paths.{mode}.{field}"),
                        hint: Some(format!(
                            "'{value}' must end with '/' because suffixes are appended verbatim"
                        )),
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_entry_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "entry names cannot be empty"
    } else if name.contains(['/', '\\']) {
        "entry names cannot contain path separators"
    } else if name.contains(NAME_PLACEHOLDER) {
        "entry names cannot contain the template placeholder"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidEntryName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Filesystem validator (for CLI use)
///
/// Validates that each entry's source module exists under the root.
///
/// # Example
///
/// ```no_run
/// use rooms_config::{ConfigValidator, FsValidator, RoomsConfig};
///
/// let validator = FsValidator::new(".");
/// validator.validate(&RoomsConfig::default()).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &RoomsConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for name in &config.entries {
            let path = self.root.join(config.templates.source_for(name));
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &RoomsConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &RoomsConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&RoomsConfig::default()).is_ok());
    }

    #[test]
    fn schema_validator_accepts_empty_entries() {
        let config = RoomsConfig {
            entries: vec![],
            ..RoomsConfig::default()
        };
        assert!(SchemaValidator.validate(&config).is_ok());
    }

    #[test]
    fn schema_validator_rejects_separator_in_name() {
        let config = RoomsConfig {
            entries: vec!["rooms/index".to_string()],
            ..RoomsConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidEntryName { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_duplicates() {
        let config = RoomsConfig {
            entries: vec!["index".to_string(), "index".to_string()],
            ..RoomsConfig::default()
        };
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::DuplicateEntry(name) if name == "index"
        ));
    }

    #[test]
    fn schema_validator_rejects_template_without_placeholder() {
        let mut config = RoomsConfig::default();
        config.templates.source = "src/rooms/index.ts".to_string();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidTemplate { field, .. } if field == "templates.source"
        ));
    }

    #[test]
    fn schema_validator_rejects_base_path_without_slash() {
        let mut config = RoomsConfig::default();
        config.base_paths.production.server_base_path = "https://example.com".to_string();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidValue { field, .. } if field == "base_paths.production.server_base_path"
        ));
    }

    #[test]
    fn schema_validator_rejects_zero_limit() {
        let mut config = RoomsConfig::default();
        config.assets.limit = 0;
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }
}
