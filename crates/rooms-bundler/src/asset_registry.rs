//! Registry of assets too large to inline.
//!
//! Every asset at or above the inline limit is rewritten to a URL under the
//! server base path and recorded here, so the caller knows what has to be
//! deployed next to the bundles. Entries are keyed by URL, which carries both
//! the server base path and the content hash, so one registry can serve
//! several modes and content revisions.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Thread-safe asset registry.
///
/// Cloning is cheap; clones share the same storage, so one registry can be
/// handed to every job in a plan.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    inner: Arc<RwLock<AssetRegistryInner>>,
}

#[derive(Debug, Default)]
struct AssetRegistryInner {
    /// Public URL -> emitted asset
    assets: FxHashMap<String, EmittedAsset>,

    /// Module id -> URLs emitted for it, in registration order
    by_source: FxHashMap<String, Vec<String>>,
}

/// An asset referenced by URL instead of embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedAsset {
    /// Module id of the asset
    pub source_id: String,

    /// Module that first referenced this asset
    pub referrer: String,

    /// Original specifier from the source code
    pub specifier: String,

    pub content_type: String,

    pub size: u64,

    /// Hashed file name, e.g. `3f2a9c0d1b4e5f60.png`
    pub file_name: String,

    /// `server_base_path` + `file_name`
    pub url: String,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an emitted asset.
    ///
    /// Returns the existing entry when the URL is already registered.
    pub fn register(&self, asset: EmittedAsset) -> EmittedAsset {
        let mut inner = self.inner.write();

        if let Some(existing) = inner.assets.get(&asset.url) {
            return existing.clone();
        }

        inner
            .by_source
            .entry(asset.source_id.clone())
            .or_default()
            .push(asset.url.clone());
        inner.assets.insert(asset.url.clone(), asset.clone());
        asset
    }

    /// Look up an asset by its public URL.
    pub fn get(&self, url: &str) -> Option<EmittedAsset> {
        let inner = self.inner.read();
        inner.assets.get(url).cloned()
    }

    /// Every asset emitted for a module id, oldest first.
    pub fn for_source(&self, source_id: &str) -> Vec<EmittedAsset> {
        let inner = self.inner.read();
        inner
            .by_source
            .get(source_id)
            .into_iter()
            .flatten()
            .filter_map(|url| inner.assets.get(url).cloned())
            .collect()
    }

    /// All registered assets, sorted by file name.
    pub fn all_assets(&self) -> Vec<EmittedAsset> {
        let inner = self.inner.read();
        let mut assets: Vec<_> = inner.assets.values().cloned().collect();
        assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        assets
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Determine content type from a module id.
    pub fn content_type_from_id(id: &str) -> &'static str {
        let ext = id
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            "webp" => "image/webp",
            "ico" => "image/x-icon",
            "woff" => "font/woff",
            "woff2" => "font/woff2",
            "ttf" => "font/ttf",
            "mp3" => "audio/mpeg",
            "wasm" => "application/wasm",
            "json" => "application/json",
            "txt" => "text/plain",
            _ => "application/octet-stream",
        }
    }
}
