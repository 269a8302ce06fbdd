//! Error types for field schema operations

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while loading or parsing field schemas
#[derive(Debug, Error)]
pub enum FieldsError {
    /// IO error reading a schema file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed schema declaration
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
