//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or initialising the card configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write a file.
    #[error("Failed to access file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("Failed to parse configuration in '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the default configuration.
    #[error("Failed to serialize default configuration: {0}")]
    SerializeError(#[source] serde_json::Error),
}
