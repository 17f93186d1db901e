//! Build plan generation.
//!
//! [`PlanGenerator`] maps an [`EnvironmentMode`] and an ordered list of entry
//! names to one [`JobDescription`] per name. Generation is pure: no I/O, no
//! environment access and no state carried between calls. The caller reads the
//! mode indicator once (see [`EnvironmentMode::from_env`]) and passes it in.

mod job;
mod output;

pub use job::{EntryDescriptor, JobDescription, TransformRule};
pub use output::{OutputFormat, OutputTarget, OutputVariant, SourceMapMode};

use rooms_config::{BasePathPair, EnvironmentMode, RoomsConfig};
use serde::Serialize;

/// The generator result: the active mode, its base paths and the jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub mode: EnvironmentMode,
    pub base_paths: BasePathPair,
    pub jobs: Vec<JobDescription>,
}

impl BuildPlan {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn job(&self, name: &str) -> Option<&JobDescription> {
        self.jobs.iter().find(|job| job.name == name)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generates build plans from a configuration.
///
/// # Example
///
/// ```
/// use rooms_bundler::{EnvironmentMode, PlanGenerator};
///
/// let plan = PlanGenerator::default().generate(EnvironmentMode::Production);
/// let job = plan.job("main-room").unwrap();
///
/// assert_eq!(job.input, "src/rooms/main-room.ts");
/// assert_eq!(job.debug_output().unwrap().file(), "./build/main-room.js");
/// assert_eq!(job.minified_output().unwrap().file(), "./build/main-room.min.js");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    config: RoomsConfig,
}

impl PlanGenerator {
    pub fn new(config: RoomsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoomsConfig {
        &self.config
    }

    /// Generate jobs for the configured entry names.
    pub fn generate(&self, mode: EnvironmentMode) -> BuildPlan {
        self.generate_entries(mode, &self.config.entries)
    }

    /// Generate jobs for an explicit, ordered list of entry names.
    ///
    /// Job order equals name order. An empty list yields an empty plan.
    pub fn generate_entries<I, S>(&self, mode: EnvironmentMode, names: I) -> BuildPlan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base_paths = self.config.base_paths.select(mode).clone();
        let external = base_paths.component_url(&self.config.external_suffix);
        let rules = self.transform_rules(&base_paths);

        let jobs = names
            .into_iter()
            .map(|name| {
                let entry = self.entry(name.as_ref(), &external);
                JobDescription::from_entry(entry, rules.clone())
            })
            .collect::<Vec<_>>();

        tracing::debug!(%mode, jobs = jobs.len(), external = %external, "generated build plan");

        BuildPlan {
            mode,
            base_paths,
            jobs,
        }
    }

    /// Derive the paths owned by one entry.
    pub fn entry(&self, name: &str, external: &str) -> EntryDescriptor {
        let templates = &self.config.templates;
        EntryDescriptor {
            name: name.to_string(),
            source: templates.source_for(name),
            debug_output: templates.debug_output_for(name),
            minified_output: templates.minified_output_for(name),
            external: external.to_string(),
        }
    }

    /// The ordered pipeline shared by every job of a run.
    fn transform_rules(&self, base_paths: &BasePathPair) -> Vec<TransformRule> {
        vec![
            TransformRule::Resolve,
            TransformRule::Replace {
                search: self.config.replace.search.clone(),
                replacement: base_paths.component_base_path.clone(),
                prevent_assignment: self.config.replace.prevent_assignment,
            },
            TransformRule::TypeScript,
            TransformRule::InlineAssets {
                limit: self.config.assets.limit,
                include: self.config.assets.include.clone(),
                public_path: base_paths.server_base_path.clone(),
            },
        ]
    }
}

/// Generate a plan with the built-in configuration.
pub fn generate_plan(mode: EnvironmentMode) -> BuildPlan {
    PlanGenerator::default().generate(mode)
}
