use std::sync::Arc;

use rooms_config::AssetOptions;
use sha2::{Digest, Sha256};

use super::{Transform, TransformPhase};
use crate::Result;
use crate::asset_registry::{AssetRegistry, EmittedAsset};
use crate::collaborators::AssetSource;
use crate::graph::{Module, ModuleGraph, ModuleKind};
use crate::sourcemap::data_uri;

/// Length of the content hash used in emitted asset file names.
const HASH_LEN: usize = 16;

/// Replaces imported assets with modules exporting their URL.
///
/// Assets strictly smaller than the limit export a `data:` URI. Anything at or
/// above the limit exports `public_path` + a content-hashed file name and is
/// recorded in the [`AssetRegistry`] for deployment.
pub struct AssetInlineTransform {
    source: Arc<dyn AssetSource>,
    registry: AssetRegistry,
    options: AssetOptions,
    public_path: String,
}

impl AssetInlineTransform {
    pub fn new(
        source: Arc<dyn AssetSource>,
        registry: AssetRegistry,
        limit: u64,
        include: Vec<String>,
        public_path: impl Into<String>,
    ) -> Self {
        Self {
            source,
            registry,
            options: AssetOptions { limit, include },
            public_path: public_path.into(),
        }
    }

    fn asset_module(
        &self,
        id: String,
        specifier: &str,
        referrer: &str,
        bytes: &[u8],
    ) -> Result<Module> {
        let content_type = AssetRegistry::content_type_from_id(&id);
        let size = bytes.len() as u64;

        if self.options.should_inline(size) {
            tracing::debug!(asset = %id, size, "inlined asset");
            let code = export_default(&data_uri(content_type, bytes))?;
            return Ok(Module::asset(id, code));
        }

        let file_name = hashed_file_name(&id, bytes);
        let url = format!("{}{}", self.public_path, file_name);
        tracing::debug!(asset = %id, size, %url, "referenced asset");

        let url = self
            .registry
            .register(EmittedAsset {
                source_id: id.clone(),
                referrer: referrer.to_string(),
                specifier: specifier.to_string(),
                content_type: content_type.to_string(),
                size,
                file_name,
                url,
            })
            .url;
        Ok(Module::asset(id, export_default(&url)?).with_asset_url(url))
    }
}

fn export_default(url: &str) -> Result<String> {
    Ok(format!("export default {};\n", serde_json::to_string(url)?))
}

impl Transform for AssetInlineTransform {
    fn name(&self) -> &'static str {
        "inline_assets"
    }

    fn phase(&self) -> TransformPhase {
        TransformPhase::Assets
    }

    fn transform(&self, mut graph: ModuleGraph) -> Result<ModuleGraph> {
        let pending: Vec<(String, String, String)> = graph
            .modules()
            .flat_map(|module| {
                module
                    .imports
                    .iter()
                    .filter(|import| !import.external && self.options.matches(import.target()))
                    .map(move |import| {
                        (
                            import.target().to_string(),
                            import.specifier.clone(),
                            module.id.clone(),
                        )
                    })
            })
            .collect();

        for (id, specifier, referrer) in pending {
            if graph.get(&id).is_some_and(|m| m.kind == ModuleKind::Asset) {
                continue;
            }

            let bytes = self.source.read(&id)?;
            let module = self.asset_module(id, &specifier, &referrer, &bytes)?;
            graph.insert(module);
        }

        Ok(graph)
    }
}

/// `<first 16 hex chars of sha256><.ext>`
pub(crate) fn hashed_file_name(id: &str, bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    let hash = &digest[..HASH_LEN];

    match id.rsplit_once('.') {
        Some((_, ext)) if !ext.contains('/') => format!("{}.{}", hash, ext.to_ascii_lowercase()),
        _ => hash.to_string(),
    }
}
