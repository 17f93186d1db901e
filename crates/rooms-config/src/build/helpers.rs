// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entries() -> Vec<String> {
    vec!["index".to_string(), "main-room".to_string()]
}

pub(crate) fn default_external_suffix() -> String {
    "dist/hubs.js".to_string()
}

pub(crate) fn default_source_template() -> String {
    "src/rooms/{name}.ts".to_string()
}

pub(crate) fn default_debug_output_template() -> String {
    "./build/{name}.js".to_string()
}

pub(crate) fn default_minified_output_template() -> String {
    "./build/{name}.min.js".to_string()
}

pub(crate) fn default_replace_search() -> String {
    "https://resources.realitymedia.digital/vue-apps/".to_string()
}

pub(crate) fn default_inline_limit() -> u64 {
    1000
}

pub(crate) fn default_asset_include() -> Vec<String> {
    ["svg", "png", "jpg", "jpeg", "gif", "webp"]
        .into_iter()
        .map(String::from)
        .collect()
}
