
//! # rooms-bundler
//!
//! Build plan generation for room bundles, plus the transform pipeline that
//! executes a plan through pluggable collaborators.
//!
//! The generator is a pure mapping: an [`EnvironmentMode`] and an ordered list
//! of entry names become one [`JobDescription`] per entry. Module resolution,
//! transpilation, minification and linking are delegated to the traits in
//! [`collaborators`]; this crate only parameterizes and composes them.
//!
//! ## Quick Start
//!
//! ### Generate a plan
//!
//! ```
//! use rooms_bundler::{EnvironmentMode, PlanGenerator};
//!
//! let plan = PlanGenerator::default().generate(EnvironmentMode::Development);
//!
//! assert_eq!(plan.jobs.len(), 2);
//! assert_eq!(plan.jobs[0].input, "src/rooms/index.ts");
//! assert_eq!(
//!     plan.jobs[0].external,
//!     vec!["https://blair-vue-apps.ngrok.io/vue-apps/dist/hubs.js".to_string()]
//! );
//! ```
//!
//! ### Read the mode from the process environment
//!
//! ```no_run
//! use rooms_bundler::{EnvironmentMode, PlanGenerator};
//!
//! // BUILD=production selects the production base paths
//! let plan = PlanGenerator::default().generate(EnvironmentMode::from_env());
//! println!("{}", plan.to_json_pretty()?);
//! # Ok::<(), rooms_bundler::Error>(())
//! ```
//!
//! ### Execute a job
//!
//! ```no_run
//! use rooms_bundler::{Collaborators, JobRunner, PlanGenerator, EnvironmentMode};
//!
//! # fn collaborators() -> Collaborators { unimplemented!() }
//! let plan = PlanGenerator::default().generate(EnvironmentMode::Production);
//! let runner = JobRunner::new(collaborators());
//!
//! for (name, result) in runner.run_all(&plan, |job| Ok(std::fs::read_to_string(&job.input)?)) {
//!     match result {
//!         Ok(output) => output.write_to(".")?,
//!         Err(err) => eprintln!("{name}: {err}"),
//!     }
//! }
//! # Ok::<(), rooms_bundler::Error>(())
//! ```

pub mod asset_registry;
pub mod collaborators;
pub mod diagnostics;
pub mod graph;
pub mod plan;
pub mod runner;
pub mod sourcemap;
pub mod transforms;

pub use asset_registry::{AssetRegistry, EmittedAsset};
pub use collaborators::{
    AssetSource, Collaborators, LinkedChunk, Linker, Minifier, ModuleResolver,
    NativeAssetSource, TranspileOutput, Transpiler,
};
pub use diagnostics::{DiagnosticSeverity, TypeDiagnostic};
pub use graph::{ImportRecord, Module, ModuleGraph, ModuleKind};
pub use plan::{
    BuildPlan, EntryDescriptor, JobDescription, OutputFormat, OutputTarget, OutputVariant,
    PlanGenerator, SourceMapMode, TransformRule, generate_plan,
};
pub use runner::{EmittedFile, JobOutput, JobRunner};
pub use transforms::{Pipeline, Transform, TransformPhase};

// Re-export the configuration surface the generator consumes
pub use rooms_config::{BasePathPair, EnvironmentMode, RoomsConfig};

/// Error types for rooms-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transpilation reported type errors. No output is produced for the job.
    #[error("Type check failed in {module}: {}", crate::diagnostics::format_diagnostics(.diagnostics))]
    TypeCheck {
        module: String,
        diagnostics: Vec<TypeDiagnostic>,
    },

    /// A collaborator (resolver, linker, minifier) failed.
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    /// Asset not found while inlining.
    #[error("Asset not found: {specifier} (searched from: {searched_from})")]
    AssetNotFound {
        specifier: String,
        searched_from: String,
    },

    /// Output path escapes the output root.
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// Plan serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rooms-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        Error::Collaborator {
            collaborator,
            message: message.into(),
        }
    }
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::TypeCheck { .. } => "TYPE_CHECK",
            Error::Collaborator { .. } => "COLLABORATOR_ERROR",
            Error::AssetNotFound { .. } => "ASSET_NOT_FOUND",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Io(_) => "IO_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::TypeCheck { diagnostics, .. } => Some(Box::new(
                diagnostics
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
            Error::AssetNotFound { specifier, .. } => Some(Box::new(format!(
                "Could not read asset '{}'.\nCheck that the file exists and the import path is correct.",
                specifier
            ))),
            Error::InvalidOutputPath(path) => Some(Box::new(format!(
                "The output path '{}' is invalid. Ensure it stays within the output directory and doesn't start with '..'.",
                path
            ))),
            _ => None,
        }
    }
}
