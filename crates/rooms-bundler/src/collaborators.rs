//! External collaborators the pipeline is parameterized with.
//!
//! The algorithms behind these traits (resolution, transpilation, linking,
//! minification) live outside this crate. Only [`NativeAssetSource`] ships
//! with a concrete implementation since reading bytes from disk carries no
//! policy of its own.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;

use crate::diagnostics::TypeDiagnostic;
use crate::graph::ModuleGraph;
use crate::{Error, Result};

/// Resolves import specifiers to module ids and loads their source.
pub trait ModuleResolver: Send + Sync {
    /// Map `specifier` imported from `importer` to a module id.
    ///
    /// `None` means the specifier could not be resolved.
    fn resolve(&self, specifier: &str, importer: &str) -> Option<String>;

    /// Load the source of a resolved script module.
    fn load(&self, id: &str) -> Result<String>;
}

/// Output of a successful transpilation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranspileOutput {
    pub code: String,
    pub map: Option<String>,
}

/// Type-checking transpiler. Fails loudly on type errors.
pub trait Transpiler: Send + Sync {
    fn transpile(
        &self,
        id: &str,
        source: &str,
    ) -> std::result::Result<TranspileOutput, Vec<TypeDiagnostic>>;
}

/// Produces a smaller equivalent of linked code.
pub trait Minifier: Send + Sync {
    fn minify(&self, file: &str, code: &str) -> Result<String>;
}

/// A single bundled chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkedChunk {
    pub code: String,
    /// Source map JSON for `code`
    pub map: Option<String>,
}

/// Joins a transformed graph into one ES module, leaving `external`
/// specifiers as imports.
pub trait Linker: Send + Sync {
    fn link(&self, graph: &ModuleGraph, external: &[String]) -> Result<LinkedChunk>;
}

/// Raw bytes of assets referenced from source.
pub trait AssetSource: Send + Sync {
    fn read(&self, id: &str) -> Result<Vec<u8>>;
}

/// Reads assets from the filesystem relative to a root directory.
#[derive(Debug, Clone)]
pub struct NativeAssetSource {
    root: PathBuf,
}

impl NativeAssetSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for NativeAssetSource {
    fn read(&self, id: &str) -> Result<Vec<u8>> {
        let path = self.root.join(id).clean();
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::AssetNotFound {
                specifier: id.to_string(),
                searched_from: self.root.display().to_string(),
            },
            _ => Error::Io(e),
        })
    }
}

/// The full set of collaborators a [`crate::JobRunner`] drives.
#[derive(Clone)]
pub struct Collaborators {
    pub resolver: Arc<dyn ModuleResolver>,
    pub transpiler: Arc<dyn Transpiler>,
    pub minifier: Arc<dyn Minifier>,
    pub linker: Arc<dyn Linker>,
    pub assets: Arc<dyn AssetSource>,
}

impl Collaborators {
    pub fn new(
        resolver: impl ModuleResolver + 'static,
        transpiler: impl Transpiler + 'static,
        minifier: impl Minifier + 'static,
        linker: impl Linker + 'static,
        assets: impl AssetSource + 'static,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            transpiler: Arc::new(transpiler),
            minifier: Arc::new(minifier),
            linker: Arc::new(linker),
            assets: Arc::new(assets),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
