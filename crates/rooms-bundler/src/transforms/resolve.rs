use std::collections::VecDeque;
use std::sync::Arc;

use super::{ReplaceTransform, Transform, TransformPhase};
use crate::collaborators::ModuleResolver;
use crate::graph::{Module, ModuleGraph, ModuleKind};
use crate::{Error, Result};

/// Resolves every import in the graph and loads newly reached script modules.
///
/// Externals are marked and never handed to the resolver. A bare specifier the
/// resolver cannot map is left external with a warning; an unresolvable
/// relative specifier is an error.
///
/// Newly loaded modules are passed through the configured rewrites before
/// their imports are scanned, the same treatment the seed graph got from the
/// rewrite phase.
pub struct ResolveTransform {
    resolver: Arc<dyn ModuleResolver>,
    external: Vec<String>,
    rewrites: Vec<ReplaceTransform>,
}

impl ResolveTransform {
    pub fn new(resolver: Arc<dyn ModuleResolver>, external: Vec<String>) -> Self {
        Self {
            resolver,
            external,
            rewrites: Vec::new(),
        }
    }

    pub fn with_rewrites(mut self, rewrites: Vec<ReplaceTransform>) -> Self {
        self.rewrites = rewrites;
        self
    }

    fn is_external(&self, specifier: &str) -> bool {
        self.external.iter().any(|e| e == specifier)
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}

impl Transform for ResolveTransform {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn phase(&self) -> TransformPhase {
        TransformPhase::Resolve
    }

    fn transform(&self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
        let mut queue: VecDeque<String> = graph.ids().map(String::from).collect();

        while let Some(id) = queue.pop_front() {
            let Some(module) = graph.get(&id) else {
                continue;
            };
            if !module.kind.is_script() {
                continue;
            }

            let mut imports = module.imports.clone();
            let mut reached = Vec::new();

            for import in &mut imports {
                if self.is_external(&import.specifier) {
                    import.external = true;
                    import.resolved = None;
                    continue;
                }

                match self.resolver.resolve(&import.specifier, &id) {
                    Some(resolved) => {
                        if ModuleKind::from_id(&resolved).is_script()
                            && !graph.contains(&resolved)
                            && !reached.contains(&resolved)
                        {
                            reached.push(resolved.clone());
                        }
                        import.resolved = Some(resolved);
                    }
                    None if is_relative(&import.specifier) => {
                        return Err(Error::collaborator(
                            "resolver",
                            format!("could not resolve '{}' from '{}'", import.specifier, id),
                        ));
                    }
                    None => {
                        tracing::warn!(
                            specifier = %import.specifier,
                            importer = %id,
                            "unresolved import treated as external"
                        );
                        import.external = true;
                    }
                }
            }

            if let Some(module) = graph.get_mut(&id) {
                module.imports = imports;
            }

            for resolved in reached {
                let code = self.resolver.load(&resolved)?;
                tracing::debug!(module = %resolved, importer = %id, "loaded module");
                let mut module = Module::new(resolved.clone(), code);
                for rewrite in &self.rewrites {
                    rewrite.rewrite_module(&mut module);
                }
                graph.insert(module);
                queue.push_back(resolved);
            }
        }

        Ok(graph)
    }
}
