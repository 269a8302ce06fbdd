//! Seedblocks — filesystem-discovered content blocks.
//!
//! A block is a directory with a `block.json` manifest, an optional
//! `fields.yaml` schema, and a renderer bound by key. The [`BlockEngine`]
//! scans ordered component roots (later roots override same-named blocks
//! entirely), registers what it finds under one editor category, and
//! renders blocks on demand through host-service traits.
//!
//! ```no_run
//! use seedblocks::{BlockEngine, BlockAttributes, FieldValues};
//! use seedblocks::{InMemoryContentStore, InMemoryMediaStore};
//!
//! let engine = BlockEngine::builder()
//!     .root("components")
//!     .root("theme/components")
//!     .build();
//!
//! let content = InMemoryContentStore::new();
//! let media = InMemoryMediaStore::new();
//! let html = engine.render(
//!     "seedblocks/banner",
//!     &FieldValues::new(),
//!     &BlockAttributes::default(),
//!     "",
//!     &content,
//!     &media,
//! )?;
//! # Ok::<(), seedblocks::EngineError>(())
//! ```

pub mod engine;
pub mod error;

pub use engine::{BlockEngine, BlockEngineBuilder, CATEGORY_SLUG, CATEGORY_TITLE, DEFAULT_NAMESPACE};
pub use error::{EngineError, Result};

pub use seedblocks_blocks::{
    discover, load_manifest, BlockCategory, BlockManifest, BlockRegistry, DiscoveredBlock,
    RegisteredBlock,
};
pub use seedblocks_fields::{
    load_field_group, BlockLocation, FieldDef, FieldGroup, FieldType, FieldValues, ImageValue,
};
pub use seedblocks_render::{
    BlockAttributes, BlockRenderer, ContentStore, ImageSize, ImageSource, ImageTag,
    InMemoryContentStore, InMemoryMediaStore, MediaStore, PostQuery, PostSummary, RenderContext,
};
