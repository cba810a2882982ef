//! Domain types for the transit network.
//!
//! Stations, lines, durations and the edges that join them. Edges are
//! validated before they enter a network, so code handed a built
//! [`Network`](crate::network::Network) can trust every endpoint has a name.

mod duration;
mod edge;
mod error;
mod line;
mod station;

pub use duration::DurationJourney;
pub use edge::{Connection, EdgeTransport};
pub use error::NetworkError;
pub use line::Line;
pub use station::{Coordinates, Station, normalize_name};
