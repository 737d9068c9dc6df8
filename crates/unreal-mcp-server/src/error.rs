//! Server error types

use thiserror::Error;

/// Result type for the MCP server loop
pub type Result<T> = std::result::Result<T, ServerError>;

/// Failures that stop the server loop
#[derive(Debug, Error)]
pub enum ServerError {
    /// Reading from or writing to the client failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
