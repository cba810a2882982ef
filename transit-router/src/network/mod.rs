//! The transit network graph and its routing queries.
//!
//! A [`Network`] is built once from a list of edges and is read-only
//! afterwards. Queries borrow it immutably and return per-query views of the
//! stored edges, so a single network can serve many queries in parallel.

mod config;
mod dijkstra;
mod graph;
mod route;
mod simplify;


use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::domain::{Connection, DurationJourney, EdgeTransport, Line, NetworkError, Station};

pub use config::{NetworkConfig, Weighting, WeightingError};
pub use dijkstra::{EdgeWeight, TraveledEdge};
pub use graph::{EdgeId, StationId};
pub use route::Route;
pub use simplify::simplify_path;

use graph::Graph;

/// A graph of stations joined by line edges.
///
/// Stations are keyed by lowercased name; the first instance supplied for a
/// key is the one the network keeps. Several edges may join the same pair of
/// stations, typically one per line.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: Graph,
    lines: BTreeMap<Line, Vec<DurationJourney>>,
    config: NetworkConfig,
}

impl Network {
    /// Build a network from edges with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidInput`] if any edge has a blank station
    /// name or an invalid distance. No network is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::{Connection, Coordinates, DurationJourney, EdgeTransport, Station};
    /// use transit_router::network::Network;
    ///
    /// let s = |name: &str| Station::new(name, Coordinates::default());
    /// let network = Network::new(vec![
    ///     EdgeTransport::new(s("Nation"), s("Bastille"), DurationJourney::from_mins(3), 2.1, "M1"),
    ///     EdgeTransport::new(s("Gare de Lyon"), s("Bastille"), DurationJourney::from_mins(2), 0.9, "M1"),
    /// ])
    /// .unwrap();
    ///
    /// let path = network.shortest_path("nation", "GARE DE LYON").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path[1].start_station().name(), "Bastille");
    /// assert_eq!(path[1].end_station().name(), "Gare de Lyon");
    /// ```
    pub fn new(edges: impl IntoIterator<Item = EdgeTransport>) -> Result<Self, NetworkError> {
        Self::with_config(edges, NetworkConfig::default())
    }

    /// Build a network from edges with the given configuration.
    pub fn with_config(
        edges: impl IntoIterator<Item = EdgeTransport>,
        config: NetworkConfig,
    ) -> Result<Self, NetworkError> {
        let mut network = Network {
            config,
            ..Network::default()
        };
        for edge in edges {
            network.add_edge(edge)?;
        }

        debug!(
            stations = network.station_count(),
            edges = network.edge_count(),
            weighting = %network.config.weighting,
            "network built"
        );

        Ok(network)
    }

    /// Add an edge, inserting its endpoints if they are new.
    ///
    /// The edge is validated first and nothing is inserted if it is
    /// malformed. An edge is always added, even when another already joins
    /// the same stations.
    pub fn add_edge(&mut self, edge: EdgeTransport) -> Result<EdgeId, NetworkError> {
        edge.validate()?;
        Ok(self.graph.insert_edge(edge))
    }

    /// Returns the configuration the network was built with.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Replace the per-line duration records.
    pub fn set_data_line(
        &mut self,
        data: impl IntoIterator<Item = (Line, Vec<DurationJourney>)>,
    ) {
        self.lines = data.into_iter().collect();
    }

    /// Returns the lines that have duration records.
    ///
    /// Empty until [`set_data_line`](Self::set_data_line) is called.
    pub fn lines(&self) -> BTreeSet<&Line> {
        self.lines.keys().collect()
    }

    /// Returns the duration records for a line.
    pub fn line_durations(&self, line: &Line) -> Option<&[DurationJourney]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    /// Look up a station by name, ignoring case.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.graph.lookup(name).map(|id| self.graph.station(id))
    }

    /// Returns all stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.graph.stations().iter()
    }

    /// Returns all edges in insertion order, labelled as supplied.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeTransport> {
        self.graph.edges().iter().map(|e| &e.transport)
    }

    pub fn station_count(&self) -> usize {
        self.graph.station_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Find the shortest path between two stations by name.
    ///
    /// Uses the configured [`Weighting`]. Each returned edge is labelled in
    /// the direction of travel: the first starts at `from`, each one ends
    /// where the next starts, and the last ends at `to`. Asking for a route
    /// from a station to itself yields an empty path.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::StationNotFound`] if either name is unknown
    /// - [`NetworkError::NoPathExists`] if nothing connects the stations
    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<TraveledEdge<'_>>, NetworkError> {
        self.shortest_path_with(from, to, &self.config.weighting)
    }

    /// Find the shortest path between two stations using a custom weight.
    pub fn shortest_path_with<W>(
        &self,
        from: &str,
        to: &str,
        weight: &W,
    ) -> Result<Vec<TraveledEdge<'_>>, NetworkError>
    where
        W: EdgeWeight + ?Sized,
    {
        let origin = self.resolve(from)?;
        let destination = self.resolve(to)?;

        match dijkstra::shortest_path(&self.graph, origin, destination, weight) {
            Some(path) => {
                debug!(from, to, edges = path.len(), "route found");
                Ok(path)
            }
            None => {
                debug!(from, to, "no route");
                Err(NetworkError::NoPathExists {
                    from: self.graph.station(origin).name().to_string(),
                    to: self.graph.station(destination).name().to_string(),
                })
            }
        }
    }

    /// Find the shortest path between two stations already in hand.
    ///
    /// The stations are matched to the network by name.
    pub fn shortest_path_between(
        &self,
        from: &Station,
        to: &Station,
    ) -> Result<Vec<TraveledEdge<'_>>, NetworkError> {
        self.shortest_path(from.name(), to.name())
    }

    /// Merge consecutive same-line edges of a path into legs.
    ///
    /// See [`simplify_path`].
    pub fn simplified_path<C: Connection>(&self, path: &[C]) -> Vec<EdgeTransport> {
        simplify_path(path)
    }

    /// Find the shortest path and its simplified legs in one go.
    pub fn route(&self, from: &str, to: &str) -> Result<Route<'_>, NetworkError> {
        let path = self.shortest_path(from, to)?;
        let legs = simplify_path(&path);
        Ok(Route { path, legs })
    }

    fn resolve(&self, name: &str) -> Result<StationId, NetworkError> {
        self.graph.lookup(name).ok_or_else(|| {
            trace!(name, "unknown station");
            NetworkError::StationNotFound(name.to_string())
        })
    }
}
