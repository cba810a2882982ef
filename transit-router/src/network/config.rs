//! Routing configuration for the network.

use std::fmt;
use std::str::FromStr;

/// Which edge attribute shortest-path queries minimise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Minimise total distance.
    #[default]
    Distance,
    /// Minimise total travel time.
    Duration,
}

/// Error returned when parsing an unknown weighting name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weighting {0:?}: expected \"distance\" or \"duration\"")]
pub struct WeightingError(String);

impl FromStr for Weighting {
    type Err = WeightingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(Weighting::Distance),
            "duration" | "time" => Ok(Weighting::Duration),
            _ => Err(WeightingError(s.to_string())),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Distance => f.write_str("distance"),
            Weighting::Duration => f.write_str("duration"),
        }
    }
}

/// Configuration applied when a network is built.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    /// Weight used by [`Network::shortest_path`](super::Network::shortest_path).
    pub weighting: Weighting,
}

impl NetworkConfig {
    /// Create a new configuration with the given weighting.
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }
}
