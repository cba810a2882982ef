//! Dataset file DTOs.
//!
//! These types map directly to the JSON layout of a network dataset: a list
//! of edges already extracted from timetable data, plus optional duration
//! records per line.

use serde::{Deserialize, Serialize};

/// Top-level dataset document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatasetFile {
    /// Connections between stations.
    pub edges: Vec<EdgeRecord>,

    /// Duration records per line. Optional in the file.
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

/// A station as written in the dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    /// Station name.
    pub name: String,

    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[serde(default)]
    pub lon: f64,
}

/// One edge between two stations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeRecord {
    /// Station the edge is listed from.
    pub from: StationRecord,

    /// Station the edge is listed to.
    pub to: StationRecord,

    /// Name of the line serving the edge.
    pub line: String,

    /// Length of the edge.
    pub distance: f64,

    /// Travel time along the edge in seconds.
    pub duration_secs: i64,
}

/// Duration records for one line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LineRecord {
    /// Line name, matching the `line` field of its edges.
    pub name: String,

    /// Journey durations in seconds.
    #[serde(default)]
    pub durations_secs: Vec<i64>,
}
