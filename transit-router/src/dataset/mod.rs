//! Loading network datasets from JSON.
//!
//! A dataset is the edge list and per-line duration records produced by an
//! upstream timetable parser. This module only deserializes that output and
//! turns it into domain types; building the [`Network`] validates it.

mod error;
mod types;

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::{Coordinates, DurationJourney, EdgeTransport, Line, NetworkError, Station};
use crate::network::{Network, NetworkConfig};

pub use error::DatasetError;
pub use types::{DatasetFile, EdgeRecord, LineRecord, StationRecord};

/// Edges and line metadata ready to build a network from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Edges in file order.
    pub edges: Vec<EdgeTransport>,

    /// Duration records keyed by line.
    pub lines: HashMap<Line, Vec<DurationJourney>>,
}

impl Dataset {
    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::parse(&json)?;

        info!(
            path = %path.display(),
            edges = dataset.edges.len(),
            lines = dataset.lines.len(),
            "dataset loaded"
        );

        Ok(dataset)
    }

    /// Parse a dataset from a JSON string.
    pub fn parse(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Build a network from the edges and attach the line records.
    pub fn into_network(self, config: NetworkConfig) -> Result<Network, DatasetError> {
        let mut network = Network::with_config(self.edges, config)?;
        network.set_data_line(self.lines);
        Ok(network)
    }
}

impl TryFrom<DatasetFile> for Dataset {
    type Error = DatasetError;

    fn try_from(file: DatasetFile) -> Result<Self, Self::Error> {
        let edges = file
            .edges
            .into_iter()
            .map(convert_edge)
            .collect::<Result<_, _>>()?;

        // Later records for the same line extend earlier ones
        let mut lines: HashMap<Line, Vec<DurationJourney>> = HashMap::new();
        for record in file.lines {
            let durations = record
                .durations_secs
                .iter()
                .map(|&secs| convert_secs(secs, &record.name))
                .collect::<Result<Vec<_>, _>>()?;
            lines
                .entry(Line::new(record.name))
                .or_default()
                .extend(durations);
        }

        Ok(Self { edges, lines })
    }
}

fn convert_secs(secs: i64, line: &str) -> Result<DurationJourney, NetworkError> {
    DurationJourney::try_from_secs(secs).ok_or_else(|| {
        NetworkError::InvalidInput(format!(
            "duration of {secs}s on line {line:?} is out of range"
        ))
    })
}

fn convert_station(record: StationRecord) -> Station {
    Station::new(record.name, Coordinates::new(record.lat, record.lon))
}

fn convert_edge(record: EdgeRecord) -> Result<EdgeTransport, NetworkError> {
    let duration = convert_secs(record.duration_secs, &record.line)?;
    Ok(EdgeTransport::new(
        convert_station(record.from),
        convert_station(record.to),
        duration,
        record.distance,
        record.line,
    ))
}
