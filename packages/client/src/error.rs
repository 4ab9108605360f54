//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection could not be established or was lost
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Outbound event could not be encoded
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
