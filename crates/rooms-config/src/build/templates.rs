use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_debug_output_template, default_minified_output_template, default_source_template,
};

/// Placeholder substituted with the entry name in every template.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Path templates for an entry's source and outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntryTemplates {
    /// Source module (default: `src/rooms/{name}.ts`)
    #[serde(default = "default_source_template")]
    pub source: String,

    /// Sourcemapped, unminified output (default: `./build/{name}.js`)
    #[serde(default = "default_debug_output_template")]
    pub debug_output: String,

    /// Minified output (default: `./build/{name}.min.js`)
    #[serde(default = "default_minified_output_template")]
    pub minified_output: String,
}

impl EntryTemplates {
    /// # Example
    ///
    /// ```
    /// use rooms_config::EntryTemplates;
    ///
    /// let templates = EntryTemplates::default();
    /// assert_eq!(templates.source_for("main-room"), "src/rooms/main-room.ts");
    /// ```
    pub fn source_for(&self, name: &str) -> String {
        expand(&self.source, name)
    }

    pub fn debug_output_for(&self, name: &str) -> String {
        expand(&self.debug_output, name)
    }

    pub fn minified_output_for(&self, name: &str) -> String {
        expand(&self.minified_output, name)
    }

    /// Iterate `(field, template)` pairs, used by validation.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("templates.source", self.source.as_str()),
            ("templates.debug_output", self.debug_output.as_str()),
            ("templates.minified_output", self.minified_output.as_str()),
        ]
    }
}

impl Default for EntryTemplates {
    fn default() -> Self {
        Self {
            source: default_source_template(),
            debug_output: default_debug_output_template(),
            minified_output: default_minified_output_template(),
        }
    }
}

fn expand(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}
