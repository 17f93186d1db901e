//! Executes job descriptions through the collaborators.
//!
//! A job runs its pipeline, hands the graph to the [`Linker`], then renders
//! each output target: the debug target gets the linked code plus an inline
//! source map, the minified target goes through the [`Minifier`] and carries
//! no source map.
//!
//! [`Linker`]: crate::collaborators::Linker
//! [`Minifier`]: crate::collaborators::Minifier

use std::fs;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::asset_registry::{AssetRegistry, EmittedAsset};
use crate::collaborators::{Collaborators, LinkedChunk};
use crate::graph::{Module, ModuleGraph};
use crate::plan::{BuildPlan, JobDescription, OutputTarget, SourceMapMode};
use crate::sourcemap::append_inline_map;
use crate::transforms::Pipeline;
use crate::{Error, Result};

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedFile {
    /// Path as written in the job's output target
    pub path: String,
    pub contents: String,
}

/// Everything one job produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOutput {
    pub name: String,
    pub files: Vec<EmittedFile>,
    /// Assets the bundle references under the server base path
    pub assets: Vec<EmittedAsset>,
}

impl JobOutput {
    pub fn file(&self, path: &str) -> Option<&EmittedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Write every emitted file below `root`, creating directories as needed.
    ///
    /// Paths that would escape `root` are rejected before anything is written.
    pub fn write_to(&self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        let targets = self
            .files
            .iter()
            .map(|file| Ok((output_path(root, &file.path)?, file)))
            .collect::<Result<Vec<_>>>()?;

        for (path, file) in targets {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &file.contents)?;
            tracing::debug!(path = %path.display(), bytes = file.contents.len(), "wrote output");
        }

        Ok(())
    }
}

fn output_path(root: &Path, file: &str) -> Result<PathBuf> {
    let relative = Path::new(file).clean();
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));

    if escapes {
        return Err(Error::InvalidOutputPath(file.to_string()));
    }

    Ok(root.join(relative))
}

/// Runs jobs against a set of collaborators.
#[derive(Debug, Clone)]
pub struct JobRunner {
    collaborators: Collaborators,
    registry: AssetRegistry,
}

impl JobRunner {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            registry: AssetRegistry::new(),
        }
    }

    /// Share an existing registry, e.g. across several runners.
    pub fn with_registry(mut self, registry: AssetRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Run one job with the given entry source.
    ///
    /// A type-check failure aborts the job; no file is rendered for it.
    pub fn run(&self, job: &JobDescription, entry_code: impl Into<String>) -> Result<JobOutput> {
        tracing::debug!(job = %job.name, input = %job.input, "running job");

        let mut pipeline = Pipeline::for_job(job, &self.collaborators, &self.registry);
        let graph = pipeline.run(ModuleGraph::new(Module::new(job.input.clone(), entry_code)))?;

        let chunk = self.collaborators.linker.link(&graph, &job.external)?;

        let files = job
            .outputs
            .iter()
            .map(|target| self.render(target, &chunk))
            .collect::<Result<Vec<_>>>()?;

        let mut assets: Vec<EmittedAsset> = Vec::new();
        for url in graph.modules().filter_map(|m| m.asset_url.as_deref()) {
            match self.registry.get(url) {
                Some(asset) if !assets.contains(&asset) => assets.push(asset),
                _ => {}
            }
        }

        Ok(JobOutput {
            name: job.name.clone(),
            files,
            assets,
        })
    }

    /// Run every job of a plan in order.
    ///
    /// Jobs are independent: a failing job is reported in place and the
    /// remaining jobs still run.
    pub fn run_all<F>(&self, plan: &BuildPlan, mut load: F) -> Vec<(String, Result<JobOutput>)>
    where
        F: FnMut(&JobDescription) -> Result<String>,
    {
        plan.jobs
            .iter()
            .map(|job| {
                let result = load(job).and_then(|code| self.run(job, code));
                if let Err(err) = &result {
                    tracing::warn!(job = %job.name, error = %err, "job failed");
                }
                (job.name.clone(), result)
            })
            .collect()
    }

    fn render(&self, target: &OutputTarget, chunk: &LinkedChunk) -> Result<EmittedFile> {
        let mut contents = if target.minify() {
            self.collaborators.minifier.minify(target.file(), &chunk.code)?
        } else {
            chunk.code.clone()
        };

        if target.sourcemap() == SourceMapMode::Inline {
            if let Some(map) = &chunk.map {
                append_inline_map(&mut contents, map);
            }
        }

        Ok(EmittedFile {
            path: target.file().to_string(),
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_stays_under_root() {
        let root = Path::new("/srv/out");
        assert_eq!(
            output_path(root, "./build/index.js").unwrap(),
            PathBuf::from("/srv/out/build/index.js")
        );
        assert_eq!(
            output_path(root, "build/../build/index.min.js").unwrap(),
            PathBuf::from("/srv/out/build/index.min.js")
        );
    }

    #[test]
    fn output_path_rejects_escape() {
        let root = Path::new("/srv/out");
        assert!(matches!(
            output_path(root, "../index.js"),
            Err(Error::InvalidOutputPath(_))
        ));
        assert!(matches!(
            output_path(root, "/etc/index.js"),
            Err(Error::InvalidOutputPath(_))
        ));
    }
}
