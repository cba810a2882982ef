use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::dataset::Dataset;
use transit_router::network::{NetworkConfig, Weighting};
use transit_router::web::{AppState, create_router};

/// Default listen address when `TRANSIT_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_router=info,tower_http=info")),
        )
        .init();

    // Read configuration from environment
    let data_path = std::env::var("TRANSIT_DATA").unwrap_or_else(|_| {
        eprintln!("Error: TRANSIT_DATA must point to a network dataset (JSON).");
        std::process::exit(2);
    });
    let addr: SocketAddr = std::env::var("TRANSIT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("TRANSIT_ADDR must be a socket address");
    let weighting: Weighting = match std::env::var("TRANSIT_WEIGHTING") {
        Ok(value) => value.parse().expect("Invalid TRANSIT_WEIGHTING"),
        Err(_) => Weighting::default(),
    };

    // Build the network once; handlers share it read-only
    let network = Dataset::load(&data_path)
        .and_then(|dataset| dataset.into_network(NetworkConfig::new(weighting)))
        .expect("Failed to build network from dataset");
    info!(
        stations = network.station_count(),
        edges = network.edge_count(),
        lines = network.lines().len(),
        %weighting,
        "network ready"
    );

    let state = AppState::new(network);
    let app = create_router(state);

    info!("Transit router listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /route?from=<station>&to=<station>");
    info!("  GET /lines");
    info!("  GET /stations");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
