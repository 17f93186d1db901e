use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_asset_include, default_inline_limit};

/// Asset inlining configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssetOptions {
    /// Assets strictly smaller than this many bytes are embedded as data URIs.
    /// Assets at or above the limit are referenced from the server base path.
    #[serde(default = "default_inline_limit")]
    pub limit: u64,

    /// File extensions (without the dot) handled as assets
    #[serde(default = "default_asset_include")]
    pub include: Vec<String>,
}

impl AssetOptions {
    /// Whether an asset of `size` bytes is embedded.
    ///
    /// # Example
    ///
    /// ```
    /// use rooms_config::AssetOptions;
    ///
    /// let assets = AssetOptions::default();
    /// assert!(assets.should_inline(999));
    /// assert!(!assets.should_inline(1000));
    /// ```
    pub fn should_inline(&self, size: u64) -> bool {
        size < self.limit
    }

    /// Whether a specifier's extension is handled as an asset.
    pub fn matches(&self, specifier: &str) -> bool {
        let Some((_, ext)) = specifier.rsplit_once('.') else {
            return false;
        };
        self.include.iter().any(|i| i.eq_ignore_ascii_case(ext))
    }
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            limit: default_inline_limit(),
            include: default_asset_include(),
        }
    }
}
