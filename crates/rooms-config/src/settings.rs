//! Global settings that do not affect the generated plan.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mode::BUILD_ENV_VAR;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GlobalSettings {
    /// Log level (`error` .. `trace`) used when no flag or `RUST_LOG` is given
    #[serde(default)]
    pub log_level: Option<String>,

    /// Environment variable holding the build mode indicator
    #[serde(default = "default_mode_variable")]
    pub mode_variable: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            log_level: None,
            mode_variable: default_mode_variable(),
        }
    }
}

fn default_mode_variable() -> String {
    BUILD_ENV_VAR.to_string()
}
