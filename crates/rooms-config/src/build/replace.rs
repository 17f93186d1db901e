use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_replace_search, default_true};

/// Path substitution settings.
///
/// The replacement value is not configurable here: it is always the active
/// `component_base_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplaceOptions {
    /// Literal searched for inside string literals
    #[serde(default = "default_replace_search")]
    pub search: String,

    /// Skip occurrences that are the target of an assignment
    #[serde(default = "default_true")]
    pub prevent_assignment: bool,
}

impl Default for ReplaceOptions {
    fn default() -> Self {
        Self {
            search: default_replace_search(),
            prevent_assignment: true,
        }
    }
}
