//! Edges between stations.

use std::fmt;

use super::{DurationJourney, NetworkError, Station};

/// Read access shared by stored edges and traveled views of them.
///
/// Anything that can be laid end to end as part of a route implements this,
/// so path post-processing doesn't care whether it holds owned edges or
/// views borrowed from a [`Network`](crate::network::Network).
pub trait Connection {
    /// The station this connection leaves from.
    fn start_station(&self) -> &Station;

    /// The station this connection arrives at.
    fn end_station(&self) -> &Station;

    /// Length of the connection.
    fn distance(&self) -> f64;

    /// Travel time along the connection.
    fn duration(&self) -> &DurationJourney;

    /// Name of the line serving the connection.
    fn line_name(&self) -> &str;

    /// Returns an owned edge with the same direction and values.
    fn to_edge(&self) -> EdgeTransport {
        EdgeTransport::new(
            self.start_station().clone(),
            self.end_station().clone(),
            self.duration().copy(),
            self.distance(),
            self.line_name(),
        )
    }
}

/// A connection between two stations on one line.
///
/// The start/end labels describe the direction the edge was supplied in. The
/// network treats edges as undirected for routing and reports the direction
/// actually traveled through per-query views, never by relabelling the
/// stored edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTransport {
    start: Station,
    end: Station,
    duration: DurationJourney,
    distance: f64,
    line_name: String,
}

impl EdgeTransport {
    /// Create an edge.
    pub fn new(
        start: Station,
        end: Station,
        duration: DurationJourney,
        distance: f64,
        line_name: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            duration,
            distance,
            line_name: line_name.into(),
        }
    }

    /// Returns the same connection labelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            ..self.clone()
        }
    }

    /// Check that the edge can be inserted into a network.
    ///
    /// Both endpoints need a non-blank name and the distance must be a
    /// finite, non-negative number. The duration must not be negative.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.start.is_unnamed() {
            return Err(NetworkError::InvalidInput(format!(
                "edge on line {:?} has an unnamed start station",
                self.line_name
            )));
        }
        if self.end.is_unnamed() {
            return Err(NetworkError::InvalidInput(format!(
                "edge on line {:?} has an unnamed end station",
                self.line_name
            )));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(NetworkError::InvalidInput(format!(
                "edge {} -> {} has invalid distance {}",
                self.start, self.end, self.distance
            )));
        }
        if self.duration < DurationJourney::zero() {
            return Err(NetworkError::InvalidInput(format!(
                "edge {} -> {} has negative duration {}",
                self.start, self.end, self.duration
            )));
        }
        Ok(())
    }
}

impl Connection for EdgeTransport {
    fn start_station(&self) -> &Station {
        &self.start
    }

    fn end_station(&self) -> &Station {
        &self.end
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn duration(&self) -> &DurationJourney {
        &self.duration
    }

    fn line_name(&self) -> &str {
        &self.line_name
    }
}

impl fmt::Display for EdgeTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {:.2}, {})",
            self.start, self.end, self.line_name, self.distance, self.duration
        )
    }
}
