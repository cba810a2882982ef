//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;

/// Shared application state.
///
/// Holds the one network every handler queries. It is built before the
/// server starts and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// The transit network
    pub network: Arc<Network>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
