//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(plan_route))
        .route("/lines", get(list_lines))
        .route("/stations", get(list_stations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find the shortest route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.network.route(&req.from, &req.to)?;
    Ok(Json(RouteResponse::from_route(&route)))
}

/// List lines with their duration records.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = &state.network;
    let lines = network
        .lines()
        .into_iter()
        .map(|line| LineResult::from_line(line, network.line_durations(line).unwrap_or_default()))
        .collect();

    Json(LinesResponse { lines })
}

/// List all stations with their coordinates.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .map(StationResult::from_station)
        .collect();

    Json(StationsResponse { stations })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::StationNotFound(_) | NetworkError::NoPathExists { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            NetworkError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, DurationJourney, EdgeTransport, Line, Station};
    use crate::network::Network;

    fn edge(from: &str, to: &str, distance: f64, line: &str) -> EdgeTransport {
        EdgeTransport::new(
            Station::new(from, Coordinates::new(48.85, 2.35)),
            Station::new(to, Coordinates::new(48.86, 2.36)),
            DurationJourney::from_secs(120),
            distance,
            line,
        )
    }

    fn state() -> AppState {
        let mut network = Network::new(vec![
            edge("Nation", "Reuilly-Diderot", 1.0, "M1"),
            edge("Reuilly-Diderot", "Gare de Lyon", 1.0, "M1"),
            edge("Gare de Lyon", "Bercy", 1.0, "M14"),
            edge("Island", "Atoll", 1.0, "M99"),
        ])
        .unwrap();
        network.set_data_line([
            (Line::new("M14"), vec![DurationJourney::from_mins(20)]),
            (Line::new("M1"), vec![DurationJourney::from_mins(30)]),
        ]);
        AppState::new(network)
    }

    fn query(from: &str, to: &str) -> Query<RouteRequest> {
        Query(RouteRequest {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn route_found() {
        let Json(resp) = plan_route(State(state()), query("nation", "BERCY"))
            .await
            .unwrap();

        assert_eq!(resp.path.len(), 3);
        assert_eq!(resp.path[0].from, "Nation");
        assert_eq!(resp.path[2].to, "Bercy");
        assert_eq!(resp.legs.len(), 2);
        assert_eq!(resp.legs[0].to, "Gare de Lyon");
        assert_eq!(resp.legs[0].distance, 2.0);
        assert_eq!(resp.total_distance, 3.0);
        assert_eq!(resp.total_duration_secs, 360);
        assert_eq!(resp.changes, 1);
    }

    #[tokio::test]
    async fn route_backwards() {
        let Json(resp) = plan_route(State(state()), query("Bercy", "Nation"))
            .await
            .unwrap();

        let stops: Vec<_> = resp.path.iter().map(|l| l.from.as_str()).collect();
        assert_eq!(stops, ["Bercy", "Gare de Lyon", "Reuilly-Diderot"]);
    }

    #[tokio::test]
    async fn route_unknown_station() {
        let err = plan_route(State(state()), query("Atlantis", "Nation"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::NotFound { ref message } if message == "station not found: Atlantis")
        );
    }

    #[tokio::test]
    async fn route_disconnected() {
        let err = plan_route(State(state()), query("Nation", "Island"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn lines_sorted_with_durations() {
        let Json(resp) = list_lines(State(state())).await;

        let names: Vec<_> = resp.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["M1", "M14"]);
        assert_eq!(resp.lines[0].durations_secs, [1800]);
    }

    #[tokio::test]
    async fn stations_listed() {
        let Json(resp) = list_stations(State(state())).await;
        assert_eq!(resp.stations.len(), 6);
        assert_eq!(resp.stations[0].name, "Nation");
        assert_eq!(resp.stations[0].lat, 48.85);
    }

    #[test]
    fn error_status_codes() {
        let resp = AppError::from(NetworkError::StationNotFound("X".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::from(NetworkError::NoPathExists {
            from: "A".into(),
            to: "B".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::from(NetworkError::InvalidInput("bad".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
