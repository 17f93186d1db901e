use serde::Serialize;

use super::output::{OutputTarget, OutputVariant};

/// Paths derived from one entry name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDescriptor {
    pub name: String,
    pub source: String,
    pub debug_output: String,
    pub minified_output: String,
    /// Shared external runtime URL
    pub external: String,
}

/// One step of a job's transform pipeline, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformRule {
    /// Resolve imports normally, skipping the job's externals
    Resolve,

    /// Rewrite `search` to `replacement` inside string literals
    Replace {
        search: String,
        replacement: String,
        prevent_assignment: bool,
    },

    /// Type-checked transpilation
    #[serde(rename = "typescript")]
    TypeScript,

    /// Embed assets smaller than `limit` bytes, reference the rest from
    /// `public_path`
    InlineAssets {
        limit: u64,
        include: Vec<String>,
        public_path: String,
    },
}

impl TransformRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Replace { .. } => "replace",
            Self::TypeScript => "typescript",
            Self::InlineAssets { .. } => "inline_assets",
        }
    }
}

/// Fully-resolved build instruction for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDescription {
    pub name: String,
    /// Source module of the entry
    pub input: String,
    /// Debug target first, minified target second
    pub outputs: Vec<OutputTarget>,
    /// Applied in order
    pub transforms: Vec<TransformRule>,
    /// Specifiers excluded from the bundle
    pub external: Vec<String>,
}

impl JobDescription {
    pub fn from_entry(entry: EntryDescriptor, transforms: Vec<TransformRule>) -> Self {
        Self {
            name: entry.name,
            input: entry.source,
            outputs: vec![
                OutputTarget::debug(entry.debug_output),
                OutputTarget::minified(entry.minified_output),
            ],
            transforms,
            external: vec![entry.external],
        }
    }

    pub fn output(&self, variant: OutputVariant) -> Option<&OutputTarget> {
        self.outputs.iter().find(|o| o.variant() == variant)
    }

    pub fn debug_output(&self) -> Option<&OutputTarget> {
        self.output(OutputVariant::Debug)
    }

    pub fn minified_output(&self) -> Option<&OutputTarget> {
        self.output(OutputVariant::Minified)
    }

    pub fn is_external(&self, specifier: &str) -> bool {
        self.external.iter().any(|e| e == specifier)
    }

    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(TransformRule::name).collect()
    }
}
