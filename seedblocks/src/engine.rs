//! The block engine — one object tying discovery, schemas, renderers, and
//! the registry together.
//!
//! Initialization is a single pass: discover blocks across the configured
//! roots, load each manifest and optional field schema, and register the
//! results. Malformed inputs degrade per file — a bad `block.json` skips
//! that block, a bad `fields.yaml` registers the block without fields —
//! and are logged at warn level, never raised.

use crate::error::{EngineError, Result};
use seedblocks_blocks::{discover, load_manifest, BlockCategory, BlockRegistry, RegisteredBlock};
use seedblocks_fields::{load_field_group, FieldGroup, FieldValues};
use seedblocks_render::renderers::POST_GRID_IMAGE_SIZE;
use seedblocks_render::{
    BannerRenderer, BlockAttributes, BlockRenderer, ContentStore, ImageSize, MediaStore,
    PostGridRenderer, RenderContext, TextImageRenderer, ThreeInARowRenderer,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Namespace prepended to unqualified manifest names.
pub const DEFAULT_NAMESPACE: &str = "seedblocks";

/// The editor category all blocks register under.
pub const CATEGORY_SLUG: &str = "seedblocks";
pub const CATEGORY_TITLE: &str = "Seed Blocks";

/// Named crop sizes the host is asked to provide for this component set.
const IMAGE_SIZES: &[ImageSize] = &[ImageSize {
    name: POST_GRID_IMAGE_SIZE,
    width: 437,
    height: 251,
    crop: true,
}];

/// Builder for [`BlockEngine`]. Starts with the built-in renderer table;
/// callers add component roots in increasing precedence order.
pub struct BlockEngineBuilder {
    roots: Vec<PathBuf>,
    namespace: String,
    renderers: HashMap<String, Box<dyn BlockRenderer>>,
}

impl BlockEngineBuilder {
    fn new() -> Self {
        let mut renderers: HashMap<String, Box<dyn BlockRenderer>> = HashMap::new();
        renderers.insert("banner".into(), Box::new(BannerRenderer));
        renderers.insert("post-grid".into(), Box::new(PostGridRenderer));
        renderers.insert("text-image".into(), Box::new(TextImageRenderer));
        renderers.insert("three-in-a-row".into(), Box::new(ThreeInARowRenderer));
        Self {
            roots: Vec::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            renderers,
        }
    }

    /// Add a component root. Later roots override earlier ones block-wise.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Bind a renderer under a key manifests can reference via `render`.
    pub fn renderer(mut self, key: impl Into<String>, renderer: Box<dyn BlockRenderer>) -> Self {
        self.renderers.insert(key.into(), renderer);
        self
    }

    /// Run the registration pass. Infallible: per-block problems degrade
    /// and are logged.
    pub fn build(self) -> BlockEngine {
        let mut registry = BlockRegistry::new();
        registry.register_category(BlockCategory {
            slug: CATEGORY_SLUG.to_string(),
            title: CATEGORY_TITLE.to_string(),
        });

        for discovered in discover(&self.roots).values() {
            let manifest = match load_manifest(&discovered.path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    tracing::warn!(
                        path = %discovered.path.display(),
                        "skipping block with unreadable manifest: {e}"
                    );
                    continue;
                }
            };
            let name = manifest.qualified_name(&self.namespace);
            let schema = load_schema(&discovered.path, &name);
            registry.register(RegisteredBlock {
                name,
                path: discovered.path.clone(),
                renderer: manifest.renderer_key().to_string(),
                manifest,
                schema,
            });
        }

        tracing::debug!(blocks = registry.len(), "block registration pass complete");
        BlockEngine {
            registry,
            renderers: self.renderers,
        }
    }
}

/// Load a block's field schema, degrading to `None` on any problem.
fn load_schema(dir: &Path, qualified_name: &str) -> Option<FieldGroup> {
    let group = match load_field_group(dir) {
        Ok(Some(group)) => group,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(
                path = %dir.display(),
                "registering block without fields, schema failed to load: {e}"
            );
            return None;
        }
    };
    if !group.location.matches(qualified_name) {
        tracing::warn!(
            path = %dir.display(),
            block = qualified_name,
            location = %group.location.block,
            "registering block without fields, schema targets a different block"
        );
        return None;
    }
    Some(group)
}

/// Discovered, registered, renderable blocks behind one handle.
pub struct BlockEngine {
    registry: BlockRegistry,
    renderers: HashMap<String, Box<dyn BlockRenderer>>,
}

impl BlockEngine {
    pub fn builder() -> BlockEngineBuilder {
        BlockEngineBuilder::new()
    }

    /// The populated registry.
    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Crop sizes the embedding host should register with its media layer.
    pub fn image_sizes(&self) -> &'static [ImageSize] {
        IMAGE_SIZES
    }

    /// Render a registered block by qualified name.
    ///
    /// Fails only for an unknown block or a missing renderer binding; field
    /// values are resolved with per-field defaults inside the renderer.
    pub fn render(
        &self,
        name: &str,
        values: &FieldValues,
        attributes: &BlockAttributes,
        inner_content: &str,
        content: &dyn ContentStore,
        media: &dyn MediaStore,
    ) -> Result<String> {
        let block = self
            .registry
            .get(name)
            .ok_or_else(|| EngineError::UnknownBlock {
                name: name.to_string(),
            })?;
        let renderer =
            self.renderers
                .get(&block.renderer)
                .ok_or_else(|| EngineError::MissingRenderer {
                    name: name.to_string(),
                    renderer: block.renderer.clone(),
                })?;
        Ok(renderer.render(&RenderContext {
            values,
            attributes,
            inner_content,
            content,
            media,
        }))
    }
}
