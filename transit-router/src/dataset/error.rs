//! Dataset loading error types.

use crate::domain::NetworkError;

/// Errors that can occur while loading a dataset into a network.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading the file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid dataset document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was rejected while building the network
    #[error("invalid dataset: {0}")]
    Invalid(#[from] NetworkError),
}
