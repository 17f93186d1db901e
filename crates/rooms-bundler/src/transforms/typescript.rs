use std::sync::Arc;

use super::Transform;
use crate::collaborators::Transpiler;
use crate::graph::{ModuleGraph, ModuleKind};
use crate::{Error, Result};

/// Type-checked transpilation of every TypeScript module.
///
/// The first module that fails aborts the transform with
/// [`Error::TypeCheck`], carrying the transpiler's diagnostics unmodified.
pub struct TypeScriptTransform {
    transpiler: Arc<dyn Transpiler>,
}

impl TypeScriptTransform {
    pub fn new(transpiler: Arc<dyn Transpiler>) -> Self {
        Self { transpiler }
    }
}

impl Transform for TypeScriptTransform {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn transform(&self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
        for module in graph
            .modules_mut()
            .filter(|m| m.kind == ModuleKind::TypeScript)
        {
            match self.transpiler.transpile(&module.id, &module.code) {
                Ok(output) => {
                    module.code = output.code;
                    module.source_map = output.map;
                    module.kind = ModuleKind::JavaScript;
                }
                Err(diagnostics) => {
                    tracing::debug!(module = %module.id, count = diagnostics.len(), "type check failed");
                    return Err(Error::TypeCheck {
                        module: module.id.clone(),
                        diagnostics,
                    });
                }
            }
        }

        Ok(graph)
    }
}
