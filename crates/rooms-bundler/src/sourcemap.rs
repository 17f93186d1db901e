//! Inline source map and data URI encoding.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

const INLINE_MAP_PREFIX: &str = "//# sourceMappingURL=data:application/json;base64,";

/// Append an inline source map comment to `code`.
///
/// A newline is inserted first when `code` does not already end with one.
pub fn append_inline_map(code: &mut String, map: &str) {
    if !code.is_empty() && !code.ends_with('\n') {
        code.push('\n');
    }
    code.push_str(INLINE_MAP_PREFIX);
    BASE64_STANDARD.encode_string(map, code);
    code.push('\n');
}

/// Whether `code` carries an inline source map comment.
pub fn has_inline_map(code: &str) -> bool {
    code.contains(INLINE_MAP_PREFIX)
}

/// Decode the inline source map of `code`, if any.
pub fn extract_inline_map(code: &str) -> Option<String> {
    let start = code.rfind(INLINE_MAP_PREFIX)? + INLINE_MAP_PREFIX.len();
    let encoded = code[start..].lines().next()?.trim();
    let bytes = BASE64_STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

/// `data:<mime>;base64,<bytes>`
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    let mut uri = format!("data:{content_type};base64,");
    BASE64_STANDARD.encode_string(bytes, &mut uri);
    uri
}
