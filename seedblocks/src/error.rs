//! Engine-level error types.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced to the embedder. Render-time field problems never land
/// here — invalid values resolve to documented defaults.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested block name is not in the registry
    #[error("unknown block: {name}")]
    UnknownBlock { name: String },

    /// The block's manifest names a renderer the engine does not carry
    #[error("block {name} binds to unknown renderer: {renderer}")]
    MissingRenderer { name: String, renderer: String },
}
