//! Environment mode resolution.
//!
//! The mode is derived from a single indicator value read from the process
//! environment. Only the exact production marker selects production; every
//! other value, including an absent variable, falls back to development.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Environment variable consulted for the build mode.
///
/// Matches rollup's `--environment BUILD:production` convention.
pub const BUILD_ENV_VAR: &str = "BUILD";

/// Indicator value that selects the production branch.
pub const PRODUCTION_MARKER: &str = "production";

/// Build environment mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    /// Any indicator other than the production marker (default)
    #[default]
    Development,
    /// Indicator equals the production marker exactly
    Production,
}

impl EnvironmentMode {
    /// Map a raw indicator value to a mode.
    ///
    /// The comparison is exact: `"Production"` or `" production"` select
    /// development.
    ///
    /// # Example
    ///
    /// ```
    /// use rooms_config::EnvironmentMode;
    ///
    /// assert_eq!(EnvironmentMode::from_indicator(Some("production")), EnvironmentMode::Production);
    /// assert_eq!(EnvironmentMode::from_indicator(Some("staging")), EnvironmentMode::Development);
    /// assert_eq!(EnvironmentMode::from_indicator(None), EnvironmentMode::Development);
    /// ```
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some(PRODUCTION_MARKER) => Self::Production,
            _ => Self::Development,
        }
    }

    /// Read the mode from [`BUILD_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::from_env_var(BUILD_ENV_VAR)
    }

    /// Read the mode from an arbitrary environment variable.
    ///
    /// Non-unicode values are treated like any other unrecognized indicator.
    pub fn from_env_var(name: &str) -> Self {
        let value = std::env::var(name).ok();
        let mode = Self::from_indicator(value.as_deref());
        tracing::debug!(variable = name, value = ?value, %mode, "resolved environment mode");
        mode
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => PRODUCTION_MARKER,
        }
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for explicit user input (CLI flags, config values).
///
/// Unlike [`EnvironmentMode::from_indicator`], unknown names are rejected.
impl FromStr for EnvironmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(format!(
                "Invalid mode: '{}'. Expected: production, development",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_marker_selects_production() {
        assert_eq!(
            EnvironmentMode::from_indicator(Some("production")),
            EnvironmentMode::Production
        );
    }

    #[test]
    fn near_misses_fall_back_to_development() {
        for value in ["Production", "PRODUCTION", " production", "production ", "prod", ""] {
            assert_eq!(
                EnvironmentMode::from_indicator(Some(value)),
                EnvironmentMode::Development,
                "indicator {value:?}"
            );
        }
    }

    #[test]
    fn absent_indicator_is_development() {
        assert_eq!(
            EnvironmentMode::from_indicator(None),
            EnvironmentMode::Development
        );
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!(
            "production".parse::<EnvironmentMode>().unwrap(),
            EnvironmentMode::Production
        );
        assert_eq!(
            "DEV".parse::<EnvironmentMode>().unwrap(),
            EnvironmentMode::Development
        );
        assert!("staging".parse::<EnvironmentMode>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EnvironmentMode::Production).unwrap(),
            "\"production\""
        );
    }
}
