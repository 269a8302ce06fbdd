//! Block rendering for Seedblocks
//!
//! Renderers are pure functions from (resolved field values, block-level
//! layout attributes) to an HTML fragment. Everything the host CMS would
//! normally provide — the content store behind the post-grid query, the
//! media store behind image resolution — enters through traits on the
//! [`RenderContext`], with in-memory implementations for tests and
//! CMS-less embedding.
//!
//! Field values are defaulted independently before use (see
//! `seedblocks_fields::resolve`); an invalid value renders as its documented
//! default, never as an error.

pub mod classes;
pub mod context;
pub mod escape;
pub mod image;
pub mod renderers;
pub mod stores;

pub use classes::ClassList;
pub use context::{BlockAttributes, BlockRenderer, RenderContext};
pub use image::ImageTag;
pub use renderers::{BannerRenderer, PostGridRenderer, TextImageRenderer, ThreeInARowRenderer};
pub use stores::{
    ContentStore, ImageSize, ImageSource, InMemoryContentStore, InMemoryMediaStore, MediaStore,
    PostQuery, PostSummary,
};
