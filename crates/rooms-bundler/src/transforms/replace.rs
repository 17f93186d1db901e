use std::sync::LazyLock;

use regex::Regex;

use super::{Transform, TransformPhase};
use crate::Result;
use crate::graph::{ImportRecord, Module, ModuleGraph, scan_imports};

// Comments and regex literals are matched so that quotes inside them never
// open a string. A `/` only starts a regex literal after an operator, an
// opening bracket, `return`, or at the start of a line; elsewhere it is
// division.
static LEXEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)//[^\n]*|/\*.*?\*/"#,
        r#"|(?:(?m:^)|[(,=:\[!&|?{};]|\breturn)\s*/(?:[^/*\\\n\[]|\\.|\[(?:[^\]\\\n]|\\.)*\])(?:[^/\\\n\[]|\\.|\[(?:[^\]\\\n]|\\.)*\])*/[a-z]*"#,
        r#"|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\.)*`"#,
    ))
    .expect("Invalid lexeme regex")
});

/// Rewrites a fixed literal inside string literals of every script module.
///
/// Runs before resolution so that imports written with the search literal
/// are resolved (or externalized) under their rewritten specifier. Modules
/// the resolver loads later go through [`ReplaceTransform::rewrite_module`].
///
/// Identifiers, comments and regex literals are never touched. With
/// assignment prevention on, a literal directly followed by `=` (but not
/// `==` or `=>`) is left as is.
#[derive(Debug, Clone)]
pub struct ReplaceTransform {
    search: String,
    replacement: String,
    prevent_assignment: bool,
}

impl ReplaceTransform {
    pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replacement: replacement.into(),
            prevent_assignment: true,
        }
    }

    pub fn prevent_assignment(mut self, prevent: bool) -> Self {
        self.prevent_assignment = prevent;
        self
    }

    /// Rewrite one script module in place and rescan its imports.
    ///
    /// Import records whose specifier survives keep their resolution state.
    /// Returns the number of occurrences replaced.
    pub fn rewrite_module(&self, module: &mut Module) -> usize {
        if self.search.is_empty() || !module.kind.is_script() {
            return 0;
        }

        let (code, count) = replace_in_string_literals(
            &module.code,
            &self.search,
            &self.replacement,
            self.prevent_assignment,
        );
        if count == 0 {
            return 0;
        }

        tracing::debug!(module = %module.id, count, "replaced base path");
        let previous = std::mem::take(&mut module.imports);
        module.imports = scan_imports(&code)
            .into_iter()
            .map(|specifier| {
                previous
                    .iter()
                    .find(|import| import.specifier == specifier)
                    .cloned()
                    .unwrap_or_else(|| ImportRecord::new(specifier))
            })
            .collect();
        module.code = code;
        count
    }
}

impl Transform for ReplaceTransform {
    fn name(&self) -> &'static str {
        "replace"
    }

    fn phase(&self) -> TransformPhase {
        TransformPhase::Rewrite
    }

    fn transform(&self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
        for module in graph.modules_mut() {
            self.rewrite_module(module);
        }
        Ok(graph)
    }
}

/// Replace `search` with `replacement` inside string and template literals.
///
/// Returns the rewritten code and the number of occurrences replaced.
///
/// # Example
///
/// ```
/// use rooms_bundler::transforms::replace_in_string_literals;
///
/// let code = r#"const url = "https://old.test/a.js"; // https://old.test/"#;
/// let (out, count) = replace_in_string_literals(code, "https://old.test/", "https://new.test/", true);
///
/// assert_eq!(out, r#"const url = "https://new.test/a.js"; // https://old.test/"#);
/// assert_eq!(count, 1);
/// ```
pub fn replace_in_string_literals(
    code: &str,
    search: &str,
    replacement: &str,
    prevent_assignment: bool,
) -> (String, usize) {
    if search.is_empty() {
        return (code.to_string(), 0);
    }

    let mut out = String::with_capacity(code.len());
    let mut count = 0;
    let mut last = 0;

    for m in LEXEME.find_iter(code) {
        out.push_str(&code[last..m.start()]);
        last = m.end();

        let text = m.as_str();
        let is_literal = text.starts_with(['"', '\'', '`']);
        if !is_literal || !text.contains(search) {
            out.push_str(text);
            continue;
        }

        if prevent_assignment && is_assignment_target(&code[m.end()..]) {
            out.push_str(text);
            continue;
        }

        count += text.matches(search).count();
        out.push_str(&text.replace(search, replacement));
    }

    out.push_str(&code[last..]);
    (out, count)
}

fn is_assignment_target(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.starts_with('=') && !rest.starts_with("==") && !rest.starts_with("=>")
}
