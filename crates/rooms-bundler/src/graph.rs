//! Module graph passed between transforms.
//!
//! Modules are kept in insertion order (entry first) so that every pass over
//! the graph, and everything rendered from it, is deterministic.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

static STATIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(?:^|[;\s}])(?:import|export)\s+(?:[^'"`;]*?\s*from\s*)?['"]([^'"\n]+)['"]"#)
        .expect("Invalid static import regex")
});

static DYNAMIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#)
        .expect("Invalid dynamic import regex")
});

/// What a module contains, derived from its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    TypeScript,
    JavaScript,
    /// Binary asset replaced by an `export default` of its URL
    Asset,
    Other,
}

impl ModuleKind {
    pub fn from_id(id: &str) -> Self {
        let ext = id
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            _ => Self::Other,
        }
    }

    /// Source code the pipeline rewrites and scans for imports.
    pub fn is_script(self) -> bool {
        matches!(self, Self::TypeScript | Self::JavaScript)
    }
}

/// One import statement found in a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    /// Specifier exactly as written in source
    pub specifier: String,
    /// Module id the resolver mapped the specifier to
    pub resolved: Option<String>,
    /// Left out of the bundle; the runtime provides it
    pub external: bool,
}

impl ImportRecord {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            resolved: None,
            external: false,
        }
    }

    /// Resolved id, falling back to the raw specifier.
    pub fn target(&self) -> &str {
        self.resolved.as_deref().unwrap_or(&self.specifier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub id: String,
    pub kind: ModuleKind,
    pub code: String,
    pub imports: Vec<ImportRecord>,
    /// Source map produced by the last code-changing transform
    pub source_map: Option<String>,
    /// Public URL of an asset referenced from the server base path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
}

impl Module {
    /// Create a module and scan its imports.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        let id = id.into();
        let code = code.into();
        let kind = ModuleKind::from_id(&id);
        let imports = if kind.is_script() {
            scan_imports(&code).into_iter().map(ImportRecord::new).collect()
        } else {
            Vec::new()
        };

        Self {
            id,
            kind,
            code,
            imports,
            source_map: None,
            asset_url: None,
        }
    }

    /// A module standing in for a binary asset.
    pub fn asset(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ModuleKind::Asset,
            code: code.into(),
            imports: Vec::new(),
            source_map: None,
            asset_url: None,
        }
    }

    pub fn with_asset_url(mut self, url: impl Into<String>) -> Self {
        self.asset_url = Some(url.into());
        self
    }
}

/// Insertion-ordered module graph rooted at one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleGraph {
    entry: String,
    modules: IndexMap<String, Module>,
}

impl ModuleGraph {
    /// Seed a graph with its entry module.
    pub fn new(entry: Module) -> Self {
        let id = entry.id.clone();
        let mut modules = IndexMap::new();
        modules.insert(id.clone(), entry);
        Self { entry: id, modules }
    }

    pub fn entry_id(&self) -> &str {
        &self.entry
    }

    pub fn entry(&self) -> Option<&Module> {
        self.modules.get(&self.entry)
    }

    /// Insert or replace a module; returns the previous one.
    pub fn insert(&mut self, module: Module) -> Option<Module> {
        self.modules.insert(module.id.clone(), module)
    }

    pub fn get(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Module> {
        self.modules.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn modules_mut(&mut self) -> impl Iterator<Item = &mut Module> {
        self.modules.values_mut()
    }

    /// Unique external specifiers, in first-seen order.
    pub fn externals(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for import in self.modules.values().flat_map(|m| &m.imports) {
            if import.external && !seen.contains(&import.specifier.as_str()) {
                seen.push(import.specifier.as_str());
            }
        }
        seen
    }
}

/// Collect import specifiers from ES module source, in order of appearance.
///
/// Covers static `import`/`export ... from` and `import()` with a literal
/// argument. Duplicates are dropped.
pub fn scan_imports(code: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for re in [&*STATIC_IMPORT, &*DYNAMIC_IMPORT] {
        for caps in re.captures_iter(code) {
            if let Some(m) = caps.get(1) {
                found.push((m.start(), m.as_str().to_string()));
            }
        }
    }

    found.sort_by_key(|(pos, _)| *pos);

    let mut specifiers: Vec<String> = Vec::with_capacity(found.len());
    for (_, specifier) in found {
        if !specifiers.contains(&specifier) {
            specifiers.push(specifier);
        }
    }
    specifiers
}
