//! Transform pipeline with execution phases.
//!
//! Each [`TransformRule`] of a job maps to one [`Transform`]. Transforms take a
//! [`ModuleGraph`] and return the rewritten graph; the [`Pipeline`] runs them
//! in phase order: path substitution, then resolution, then transpilation,
//! then asset processing. The job's rule list keeps its declared order; the
//! phases decide execution order.

mod asset_inline;
mod replace;
mod resolve;
mod typescript;

pub use asset_inline::AssetInlineTransform;
pub use replace::{ReplaceTransform, replace_in_string_literals};
pub use resolve::ResolveTransform;
pub use typescript::TypeScriptTransform;

use std::sync::Arc;

use crate::Result;
use crate::asset_registry::AssetRegistry;
use crate::collaborators::Collaborators;
use crate::graph::ModuleGraph;
use crate::plan::{JobDescription, TransformRule};

/// Transform execution phases
///
/// Transforms are executed in phase order (lower numbers first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformPhase {
    /// Literal source rewriting
    ///
    /// Runs before resolution so rewritten import specifiers are the ones
    /// that get resolved or externalized.
    Rewrite = 5,

    /// Module resolution
    ///
    /// Fills in the module graph. Must run before anything reads it.
    Resolve = 10,

    /// Transpilation
    Transform = 20,

    /// Asset processing
    ///
    /// Runs after transformation, once every import is resolved.
    Assets = 30,
}

/// One step of the pipeline: module graph in, module graph out.
pub trait Transform: Send + Sync {
    fn name(&self) -> &'static str;

    /// Defaults to `Transform`.
    fn phase(&self) -> TransformPhase {
        TransformPhase::Transform
    }

    fn transform(&self, graph: ModuleGraph) -> Result<ModuleGraph>;
}

/// Ordered set of transforms for one job.
#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<(TransformPhase, Arc<dyn Transform>)>,
    sorted: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the pipeline described by a job's rules.
    pub fn for_job(
        job: &JobDescription,
        collaborators: &Collaborators,
        registry: &AssetRegistry,
    ) -> Self {
        let mut pipeline = Self::new();

        // Modules reached during resolution are rewritten as they load
        let rewrites: Vec<ReplaceTransform> =
            job.transforms.iter().filter_map(replace_from_rule).collect();

        for rule in &job.transforms {
            match rule {
                TransformRule::Resolve => pipeline.add(
                    ResolveTransform::new(collaborators.resolver.clone(), job.external.clone())
                        .with_rewrites(rewrites.clone()),
                ),
                TransformRule::Replace { .. } => {
                    if let Some(replace) = replace_from_rule(rule) {
                        pipeline.add(replace);
                    }
                }
                TransformRule::TypeScript => {
                    pipeline.add(TypeScriptTransform::new(collaborators.transpiler.clone()))
                }
                TransformRule::InlineAssets {
                    limit,
                    include,
                    public_path,
                } => pipeline.add(AssetInlineTransform::new(
                    collaborators.assets.clone(),
                    registry.clone(),
                    *limit,
                    include.clone(),
                    public_path.clone(),
                )),
            }
        }

        pipeline
    }

    /// Add a transform at its own phase.
    ///
    /// Sorting happens once, on the first run, and is stable so transforms
    /// within a phase keep insertion order.
    pub fn add<T: Transform + 'static>(&mut self, transform: T) {
        let phase = transform.phase();
        self.add_with_phase(Arc::new(transform), phase);
    }

    /// Add a transform with an explicit phase.
    pub fn add_with_phase(&mut self, transform: Arc<dyn Transform>, phase: TransformPhase) {
        self.transforms.push((phase, transform));
        self.sorted = false;
    }

    /// Transform names in execution order.
    pub fn names(&mut self) -> Vec<&'static str> {
        self.sort();
        self.transforms.iter().map(|(_, t)| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every transform in phase order.
    ///
    /// Stops at the first failure; the error is returned unchanged.
    pub fn run(&mut self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
        self.sort();
        for (phase, transform) in &self.transforms {
            tracing::trace!(transform = transform.name(), ?phase, modules = graph.len(), "running transform");
            graph = transform.transform(graph)?;
        }
        Ok(graph)
    }

    fn sort(&mut self) {
        if !self.sorted {
            self.transforms.sort_by_key(|(phase, _)| *phase);
            self.sorted = true;
        }
    }
}

fn replace_from_rule(rule: &TransformRule) -> Option<ReplaceTransform> {
    match rule {
        TransformRule::Replace {
            search,
            replacement,
            prevent_assignment,
        } => Some(
            ReplaceTransform::new(search.clone(), replacement.clone())
                .prevent_assignment(*prevent_assignment),
        ),
        _ => None,
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|(phase, t)| (phase, t.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Module;

    struct Tag(&'static str, TransformPhase);

    impl Transform for Tag {
        fn name(&self) -> &'static str {
            self.0
        }

        fn phase(&self) -> TransformPhase {
            self.1
        }

        fn transform(&self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
            let id = graph.entry_id().to_string();
            if let Some(module) = graph.get_mut(&id) {
                module.code.push_str(self.0);
            }
            Ok(graph)
        }
    }

    #[test]
    fn runs_in_phase_order_stably() {
        let mut pipeline = Pipeline::new();
        pipeline.add(Tag("c", TransformPhase::Assets));
        pipeline.add(Tag("a", TransformPhase::Transform));
        pipeline.add(Tag("r", TransformPhase::Resolve));
        pipeline.add(Tag("b", TransformPhase::Transform));
        pipeline.add(Tag("w", TransformPhase::Rewrite));

        assert_eq!(pipeline.names(), vec!["w", "r", "a", "b", "c"]);

        let graph = pipeline
            .run(ModuleGraph::new(Module::new("entry.js", "")))
            .unwrap();
        assert_eq!(graph.entry().unwrap().code, "wrabc");
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let graph = ModuleGraph::new(Module::new("entry.js", "export {}"));
        let out = Pipeline::new().run(graph.clone()).unwrap();
        assert_eq!(out, graph);
    }
}
