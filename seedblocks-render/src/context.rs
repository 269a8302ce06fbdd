//! Render context and the renderer trait.

use crate::stores::{ContentStore, MediaStore};
use seedblocks_fields::FieldValues;

/// Block-level layout attributes supplied by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAttributes {
    /// Alignment variant (`wide`, `full`, ...).
    pub align: Option<String>,
    /// HTML anchor for in-page linking.
    pub anchor: Option<String>,
    /// Extra caller-supplied class.
    pub class_name: Option<String>,
}

impl BlockAttributes {
    fn get(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or_default()
    }

    pub fn align(&self) -> &str {
        Self::get(&self.align)
    }

    pub fn anchor(&self) -> &str {
        Self::get(&self.anchor)
    }

    pub fn class_name(&self) -> &str {
        Self::get(&self.class_name)
    }
}

/// Everything one render invocation sees: the resolved field values, the
/// block attributes, inner content from nested blocks, and the host-service
/// handles.
pub struct RenderContext<'a> {
    pub values: &'a FieldValues,
    pub attributes: &'a BlockAttributes,
    /// Pre-rendered inner-block content for blocks with a content slot.
    pub inner_content: &'a str,
    pub content: &'a dyn ContentStore,
    pub media: &'a dyn MediaStore,
}

/// A per-block pure render function.
pub trait BlockRenderer: Send + Sync {
    /// Render the block to an HTML fragment. Invalid or missing field values
    /// resolve to documented defaults; rendering never fails.
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}
