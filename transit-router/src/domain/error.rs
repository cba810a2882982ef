//! Network error types.
//!
//! These classify why a query or a construction step could not produce a
//! result. All of them are recoverable and left to the caller to present.

/// Errors reported by [`Network`](crate::network::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A supplied station name has no vertex in the network
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// Both stations exist but nothing connects them
    #[error("no path from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// A malformed edge was rejected before insertion
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
