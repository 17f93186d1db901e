use serde::Serialize;

/// Module format of an emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module
    #[default]
    Es,
}

/// How the source map of an output is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    None,
    /// Appended as a base64 `sourceMappingURL` comment
    Inline,
}

/// Which of the two artifacts of an entry a target describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputVariant {
    /// Readable output with an inline source map
    Debug,
    /// Size-reduced output without a source map
    Minified,
}

/// One output file of a job.
///
/// The post-processing flags are fixed by the variant: a debug target is
/// never minified and a minified target never carries a source map. Fields
/// are private so that no other combination can be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutputTarget {
    file: String,
    format: OutputFormat,
    variant: OutputVariant,
    sourcemap: SourceMapMode,
    minify: bool,
}

impl OutputTarget {
    pub fn debug(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::Es,
            variant: OutputVariant::Debug,
            sourcemap: SourceMapMode::Inline,
            minify: false,
        }
    }

    pub fn minified(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::Es,
            variant: OutputVariant::Minified,
            sourcemap: SourceMapMode::None,
            minify: true,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn variant(&self) -> OutputVariant {
        self.variant
    }

    pub fn sourcemap(&self) -> SourceMapMode {
        self.sourcemap
    }

    pub fn minify(&self) -> bool {
        self.minify
    }
}
