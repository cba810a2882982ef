//! A computed route: the traveled edges and their simplified legs.

use crate::domain::{Connection, DurationJourney, EdgeTransport};

use super::dijkstra::TraveledEdge;

/// The answer to a routing query.
///
/// `path` lists every edge crossed, each labelled in the direction of
/// travel. `legs` is the same route with consecutive same-line edges merged.
#[derive(Debug, Clone)]
pub struct Route<'g> {
    /// Edges crossed, origin first.
    pub path: Vec<TraveledEdge<'g>>,
    /// One entry per uninterrupted ride on a line.
    pub legs: Vec<EdgeTransport>,
}

impl Route<'_> {
    /// Returns true if origin and destination are the same station.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Total distance over the route.
    pub fn total_distance(&self) -> f64 {
        self.path.iter().map(|e| e.distance()).sum()
    }

    /// Total travel time over the route.
    pub fn total_duration(&self) -> DurationJourney {
        self.path.iter().map(|e| e.duration()).sum()
    }

    /// Number of line changes along the route.
    pub fn change_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}
