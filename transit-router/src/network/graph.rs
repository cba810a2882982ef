//! Arena-backed multigraph of stations and edges.
//!
//! Stations live in a `Vec` and are addressed by [`StationId`]; edges refer
//! to their endpoints by id. A side index maps each normalized station name
//! to its id, so textually equal names always land on one vertex.

use std::collections::HashMap;

use crate::domain::{Connection, EdgeTransport, Station, normalize_name};

/// Index of a station in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub usize);

/// Index of an edge in the graph arena, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// An edge as stored: the supplied transport plus its resolved endpoints.
#[derive(Debug, Clone)]
pub(crate) struct GraphEdge {
    pub start: StationId,
    pub end: StationId,
    pub transport: EdgeTransport,
}

impl GraphEdge {
    /// Returns the endpoint across the edge from `from`.
    pub fn opposite(&self, from: StationId) -> StationId {
        if from == self.start {
            self.end
        } else {
            self.start
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Graph {
    stations: Vec<Station>,
    index: HashMap<String, StationId>,
    edges: Vec<GraphEdge>,
    /// Incident edge ids per station, in insertion order.
    adjacency: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Insert a station unless one with the same key exists.
    ///
    /// The first instance inserted under a key is the one kept.
    pub fn insert_station(&mut self, station: &Station) -> StationId {
        if let Some(&id) = self.index.get(&station.key()) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.index.insert(station.key(), id);
        self.stations.push(station.clone());
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an edge, adding its endpoints as needed.
    ///
    /// Always creates a new edge, even if one already joins the same pair.
    pub fn insert_edge(&mut self, transport: EdgeTransport) -> EdgeId {
        let start = self.insert_station(transport.start_station());
        let end = self.insert_station(transport.end_station());
        let id = EdgeId(self.edges.len());

        self.edges.push(GraphEdge {
            start,
            end,
            transport,
        });
        self.adjacency[start.0].push(id);
        if end != start {
            self.adjacency[end.0].push(id);
        }
        id
    }

    /// Look up a station id by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.index.get(&normalize_name(name)).copied()
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &GraphEdge {
        &self.edges[id.0]
    }

    /// Edges touching a station, in insertion order.
    pub fn incident(&self, id: StationId) -> &[EdgeId] {
        &self.adjacency[id.0]
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
