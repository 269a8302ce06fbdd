//! Block discovery — scans component roots with override precedence.
//!
//! Precedence: earlier roots < later roots (a later root's same-named block
//! replaces the earlier one entirely; fields are never merged).

use crate::manifest::MANIFEST_FILE;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A block found on disk: its identity is the directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredBlock {
    pub name: String,
    pub path: PathBuf,
}

/// Discover blocks across ordered roots (increasing precedence).
///
/// A subdirectory qualifies as a block iff it contains a `block.json`.
/// Hidden entries are skipped. A missing or unreadable root contributes
/// zero blocks, not an error.
pub fn discover(roots: &[PathBuf]) -> BTreeMap<String, DiscoveredBlock> {
    let mut blocks = BTreeMap::new();
    for root in roots {
        scan_root(root, &mut blocks);
    }
    blocks
}

fn scan_root(root: &Path, blocks: &mut BTreeMap<String, DiscoveredBlock>) {
    if !root.is_dir() {
        return;
    }

    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read components directory {}: {}", root.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() && path.join(MANIFEST_FILE).exists() {
            tracing::debug!(name = %name, path = %path.display(), "discovered block");
            blocks.insert(name.clone(), DiscoveredBlock { name, path });
        }
    }
}
