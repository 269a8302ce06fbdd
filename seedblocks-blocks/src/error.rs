//! Error types for block discovery and registration

use std::path::PathBuf;
use thiserror::Error;

/// Result type for block operations
pub type Result<T> = std::result::Result<T, BlockError>;

/// Errors that can occur while loading manifests or registering blocks
#[derive(Debug, Error)]
pub enum BlockError {
    /// The block directory has no manifest file
    #[error("no block.json found in {path}")]
    MissingManifest { path: PathBuf },

    /// IO error reading a manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed manifest
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
