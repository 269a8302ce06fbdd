//! Block discovery and registration
//!
//! A block is a directory holding a `block.json` manifest and, optionally, a
//! `fields.yaml` schema. This crate scans ordered root directories for such
//! directories, merges them with whole-block override precedence (later roots
//! win), and stores the results in an explicit [`BlockRegistry`] together
//! with the block-category descriptor.
//!
//! Discovery is a pure function over paths — inject a temp directory to test
//! it without a host CMS.

pub mod discovery;
pub mod error;
pub mod manifest;
pub mod registry;

pub use discovery::{discover, DiscoveredBlock};
pub use error::{BlockError, Result};
pub use manifest::{load_manifest, BlockManifest, MANIFEST_FILE};
pub use registry::{BlockCategory, BlockRegistry, RegisteredBlock};
