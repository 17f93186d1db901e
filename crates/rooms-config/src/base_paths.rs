//! Environment-selected base URLs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mode::EnvironmentMode;

pub const DEV_COMPONENT_BASE_PATH: &str = "https://blair-vue-apps.ngrok.io/vue-apps/";
pub const DEV_SERVER_BASE_PATH: &str = "https://blair-core-components.ngrok.io/";
pub const PROD_COMPONENT_BASE_PATH: &str = "https://williamcaseylucas.github.io/vue-apps/";
pub const PROD_SERVER_BASE_PATH: &str = "https://williamcaseylucas.github.io/core-components/";

/// Root URLs for shared components and server-hosted assets.
///
/// Both values always come from the same branch; there is no way to select
/// one field per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BasePathPair {
    /// Root for shared component modules, including the external runtime
    pub component_base_path: String,

    /// Root for assets too large to inline
    pub server_base_path: String,
}

impl BasePathPair {
    pub fn new(component_base_path: impl Into<String>, server_base_path: impl Into<String>) -> Self {
        Self {
            component_base_path: component_base_path.into(),
            server_base_path: server_base_path.into(),
        }
    }

    pub fn development() -> Self {
        Self::new(DEV_COMPONENT_BASE_PATH, DEV_SERVER_BASE_PATH)
    }

    pub fn production() -> Self {
        Self::new(PROD_COMPONENT_BASE_PATH, PROD_SERVER_BASE_PATH)
    }

    /// Concatenate the component base path with a suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use rooms_config::BasePathPair;
    ///
    /// let pair = BasePathPair::development();
    /// assert_eq!(
    ///     pair.component_url("dist/hubs.js"),
    ///     "https://blair-vue-apps.ngrok.io/vue-apps/dist/hubs.js"
    /// );
    /// ```
    pub fn component_url(&self, suffix: &str) -> String {
        format!("{}{}", self.component_base_path, suffix)
    }

    /// Concatenate the server base path with a file name.
    pub fn server_url(&self, file_name: &str) -> String {
        format!("{}{}", self.server_base_path, file_name)
    }
}

/// Both base path pairs, keyed by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BasePaths {
    #[serde(default = "BasePathPair::development")]
    pub development: BasePathPair,

    #[serde(default = "BasePathPair::production")]
    pub production: BasePathPair,
}

impl BasePaths {
    /// Pick the active pair for a mode.
    pub fn select(&self, mode: EnvironmentMode) -> &BasePathPair {
        match mode {
            EnvironmentMode::Production => &self.production,
            EnvironmentMode::Development => &self.development,
        }
    }
}

impl Default for BasePaths {
    fn default() -> Self {
        Self {
            development: BasePathPair::development(),
            production: BasePathPair::production(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_matching_pair() {
        let paths = BasePaths::default();
        assert_eq!(
            paths.select(EnvironmentMode::Production),
            &BasePathPair::production()
        );
        assert_eq!(
            paths.select(EnvironmentMode::Development),
            &BasePathPair::development()
        );
    }

    #[test]
    fn server_url_is_rooted_at_server_base() {
        let pair = BasePathPair::production();
        assert_eq!(
            pair.server_url("logo.png"),
            "https://williamcaseylucas.github.io/core-components/logo.png"
        );
    }
}
