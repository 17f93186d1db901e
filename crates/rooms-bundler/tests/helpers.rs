//! Shared test utilities for rooms-bundler tests
//!
//! In-memory collaborators standing in for the real resolver, transpiler,
//! linker and minifier.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use path_clean::PathClean;
use rooms_bundler::{
    AssetSource, Collaborators, Error, LinkedChunk, Linker, Minifier, ModuleGraph, ModuleResolver,
    Result, TranspileOutput, Transpiler, TypeDiagnostic,
};

/// Marker that makes [`FakeTranspiler`] report a type error.
pub const TYPE_ERROR_MARKER: &str = "@type-error";

/// Resolves relative specifiers against an in-memory file table.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: HashMap<String, String>,
    assets: Vec<String>,
    bare: HashMap<String, String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, id: &str, code: &str) -> Self {
        self.files.insert(id.to_string(), code.to_string());
        self
    }

    pub fn asset(mut self, id: &str) -> Self {
        self.assets.push(id.to_string());
        self
    }

    pub fn bare(mut self, specifier: &str, id: &str) -> Self {
        self.bare.insert(specifier.to_string(), id.to_string());
        self
    }

    fn known(&self, id: &str) -> bool {
        self.files.contains_key(id) || self.assets.iter().any(|a| a == id)
    }
}

impl ModuleResolver for MemoryResolver {
    fn resolve(&self, specifier: &str, importer: &str) -> Option<String> {
        if !specifier.starts_with('.') {
            return self.bare.get(specifier).cloned();
        }

        let dir = Path::new(importer).parent().unwrap_or(Path::new(""));
        let joined = dir.join(specifier).clean();
        let id = joined.to_string_lossy().replace('\\', "/");

        [id.clone(), format!("{id}.ts")]
            .into_iter()
            .find(|candidate| self.known(candidate))
    }

    fn load(&self, id: &str) -> Result<String> {
        self.files
            .get(id)
            .cloned()
            .ok_or_else(|| Error::collaborator("resolver", format!("no such module '{id}'")))
    }
}

/// Drops `: type` annotations on `let`/`const` bindings and fails on
/// [`TYPE_ERROR_MARKER`].
#[derive(Debug, Default)]
pub struct FakeTranspiler;

impl Transpiler for FakeTranspiler {
    fn transpile(
        &self,
        id: &str,
        source: &str,
    ) -> std::result::Result<TranspileOutput, Vec<TypeDiagnostic>> {
        if let Some(line) = source.lines().position(|l| l.contains(TYPE_ERROR_MARKER)) {
            return Err(vec![
                TypeDiagnostic::error(id, "Type 'string' is not assignable to type 'number'.")
                    .at(line as u32 + 1, 1)
                    .with_code("TS2322"),
            ]);
        }

        let code = source
            .replace(": string", "")
            .replace(": number", "");
        Ok(TranspileOutput {
            code,
            map: Some(format!(r#"{{"version":3,"sources":["{id}"],"mappings":""}}"#)),
        })
    }
}

/// Collapses whitespace and drops comment lines; counts invocations.
#[derive(Debug, Default, Clone)]
pub struct FakeMinifier {
    pub calls: Arc<AtomicUsize>,
}

impl FakeMinifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Minifier for FakeMinifier {
    fn minify(&self, _file: &str, code: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(code
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with("//"))
            .collect::<Vec<_>>()
            .join(""))
    }
}

/// Emits external imports, then every module in graph order.
#[derive(Debug, Default)]
pub struct FakeLinker;

impl Linker for FakeLinker {
    fn link(&self, graph: &ModuleGraph, external: &[String]) -> Result<LinkedChunk> {
        let mut code = String::new();
        for specifier in external {
            code.push_str(&format!("import \"{specifier}\";\n"));
        }
        for module in graph.modules() {
            code.push_str(&format!("// {}\n{}\n", module.id, module.code.trim_end()));
        }

        let sources = graph
            .ids()
            .map(|id| format!("\"{id}\""))
            .collect::<Vec<_>>()
            .join(",");
        Ok(LinkedChunk {
            code,
            map: Some(format!(r#"{{"version":3,"sources":[{sources}],"mappings":""}}"#)),
        })
    }
}

/// Asset bytes held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, size: usize) -> Self {
        self.assets.insert(id.to_string(), vec![b'x'; size]);
        self
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, id: &str) -> Result<Vec<u8>> {
        self.assets.get(id).cloned().ok_or_else(|| Error::AssetNotFound {
            specifier: id.to_string(),
            searched_from: "memory".to_string(),
        })
    }
}

/// Collaborators over the given resolver and assets.
pub fn collaborators(resolver: MemoryResolver, assets: MemoryAssets) -> Collaborators {
    Collaborators::new(resolver, FakeTranspiler, FakeMinifier::default(), FakeLinker, assets)
}

/// Collaborators sharing a minifier whose call count the test can read.
pub fn collaborators_with_minifier(
    resolver: MemoryResolver,
    assets: MemoryAssets,
    minifier: FakeMinifier,
) -> Collaborators {
    Collaborators::new(resolver, FakeTranspiler, minifier, FakeLinker, assets)
}
