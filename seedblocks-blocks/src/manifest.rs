//! Parses `block.json` manifest files.

use crate::error::{BlockError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The per-block manifest file name. A directory without one is not a block.
pub const MANIFEST_FILE: &str = "block.json";

/// The per-block descriptor establishing identity and render binding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockManifest {
    /// Block name, optionally namespace-qualified (`seedblocks/banner`).
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Renderer key. Defaults to the unqualified block name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

impl BlockManifest {
    /// The fully-qualified registration name, applying `default_ns` when the
    /// manifest name carries no namespace of its own.
    pub fn qualified_name(&self, default_ns: &str) -> String {
        if self.name.contains('/') {
            self.name.clone()
        } else {
            format!("{}/{}", default_ns, self.name)
        }
    }

    /// The name without its namespace.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// The renderer key this block binds to.
    pub fn renderer_key(&self) -> &str {
        self.render.as_deref().unwrap_or_else(|| self.short_name())
    }
}

/// Load and parse the manifest from a block directory.
pub fn load_manifest(dir: &Path) -> Result<BlockManifest> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(BlockError::MissingManifest {
            path: dir.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(&path)?;
    let manifest: BlockManifest = serde_json::from_str(&content)?;
    tracing::debug!(?path, name = %manifest.name, "loaded block manifest");
    Ok(manifest)
}
