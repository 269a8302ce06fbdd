//! BlockRegistry — explicit registry for registered blocks and categories.
//!
//! The registry replaces the host framework's ambient global registration
//! state with an owned service: `register` is idempotent per name (last
//! writer wins within a pass), `register_category` merges exactly once per
//! slug.

use crate::manifest::BlockManifest;
use seedblocks_fields::FieldGroup;
use std::collections::HashMap;
use std::path::PathBuf;

/// A block-category descriptor merged into the editor's category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCategory {
    pub slug: String,
    pub title: String,
}

/// A block registered with the editor.
#[derive(Debug, Clone)]
pub struct RegisteredBlock {
    /// Fully-qualified name, e.g. `seedblocks/banner`.
    pub name: String,
    pub path: PathBuf,
    pub manifest: BlockManifest,
    /// The block's field schema, when one loaded successfully.
    pub schema: Option<FieldGroup>,
    /// Key into the renderer table.
    pub renderer: String,
}

/// In-memory registry populated once during engine initialization.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    blocks: HashMap<String, RegisteredBlock>,
    categories: Vec<BlockCategory>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block. Re-registering the same name replaces the previous
    /// entry — harmless within a pass, last writer wins.
    pub fn register(&mut self, block: RegisteredBlock) {
        tracing::debug!(name = %block.name, path = %block.path.display(), "registered block");
        self.blocks.insert(block.name.clone(), block);
    }

    /// Merge a category descriptor into the category list, once per slug.
    pub fn register_category(&mut self, category: BlockCategory) {
        if self.categories.iter().any(|c| c.slug == category.slug) {
            return;
        }
        self.categories.push(category);
    }

    /// Get a registered block by qualified name.
    pub fn get(&self, name: &str) -> Option<&RegisteredBlock> {
        self.blocks.get(name)
    }

    /// All registered blocks, sorted by name.
    pub fn list(&self) -> Vec<&RegisteredBlock> {
        let mut blocks: Vec<_> = self.blocks.values().collect();
        blocks.sort_by_key(|b| b.name.as_str());
        blocks
    }

    /// Registered categories, in merge order.
    pub fn categories(&self) -> &[BlockCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
