//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, DurationJourney, Line, Station};
use crate::network::Route;

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name (case-insensitive)
    pub from: String,

    /// Destination station name (case-insensitive)
    pub to: String,
}

/// A station with its position.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Latitude
    pub lat: f64,

    /// Longitude
    pub lon: f64,
}

/// One edge or merged leg of a route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Station boarded at
    pub from: String,

    /// Station alighted at
    pub to: String,

    /// Line ridden
    pub line: String,

    /// Distance covered
    pub distance: f64,

    /// Travel time in seconds
    pub duration_secs: i64,

    /// Travel time as H:MM:SS
    pub duration: String,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Every edge crossed, origin first
    pub path: Vec<LegResult>,

    /// Consecutive same-line edges merged
    pub legs: Vec<LegResult>,

    /// Total distance
    pub total_distance: f64,

    /// Total travel time in seconds
    pub total_duration_secs: i64,

    /// Number of line changes
    pub changes: usize,
}

/// A line and its duration records.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line name
    pub name: String,

    /// Recorded journey durations in seconds
    pub durations_secs: Vec<i64>,
}

/// Response listing lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    /// Lines in name order
    pub lines: Vec<LineResult>,
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Stations in insertion order
    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl LegResult {
    /// Create from any edge or leg.
    pub fn from_connection<C: Connection>(edge: &C) -> Self {
        Self {
            from: edge.start_station().name().to_string(),
            to: edge.end_station().name().to_string(),
            line: edge.line_name().to_string(),
            distance: edge.distance(),
            duration_secs: edge.duration().as_secs(),
            duration: edge.duration().to_string(),
        }
    }
}

impl RouteResponse {
    /// Create from a computed route.
    pub fn from_route(route: &Route<'_>) -> Self {
        Self {
            path: route.path.iter().map(LegResult::from_connection).collect(),
            legs: route.legs.iter().map(LegResult::from_connection).collect(),
            total_distance: route.total_distance(),
            total_duration_secs: route.total_duration().as_secs(),
            changes: route.change_count(),
        }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let coordinates = station.coordinates();
        Self {
            name: station.name().to_string(),
            lat: coordinates.lat,
            lon: coordinates.lon,
        }
    }
}

impl LineResult {
    /// Create from a line and its records.
    pub fn from_line(line: &Line, durations: &[DurationJourney]) -> Self {
        Self {
            name: line.name().to_string(),
            durations_secs: durations.iter().map(DurationJourney::as_secs).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, EdgeTransport};

    #[test]
    fn leg_from_edge() {
        let edge = EdgeTransport::new(
            Station::new("Nation", Coordinates::default()),
            Station::new("Bastille", Coordinates::default()),
            DurationJourney::from_secs(200),
            2.5,
            "M1",
        );

        let leg = LegResult::from_connection(&edge);
        assert_eq!(leg.from, "Nation");
        assert_eq!(leg.to, "Bastille");
        assert_eq!(leg.line, "M1");
        assert_eq!(leg.distance, 2.5);
        assert_eq!(leg.duration_secs, 200);
        assert_eq!(leg.duration, "0:03:20");
    }

    #[test]
    fn station_result_fields() {
        let station = Station::new("Nation", Coordinates::new(48.8483, 2.3959));
        let result = StationResult::from_station(&station);
        assert_eq!(result.name, "Nation");
        assert_eq!(result.lat, 48.8483);
        assert_eq!(result.lon, 2.3959);
    }

    #[test]
    fn line_result_serializes() {
        let result = LineResult::from_line(
            &Line::new("M14"),
            &[DurationJourney::from_mins(20), DurationJourney::from_mins(22)],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "M14", "durations_secs": [1200, 1320]})
        );
    }

    #[test]
    fn error_response_serializes() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "station not found: Atlantis".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"station not found: Atlantis"}"#);
    }
}
