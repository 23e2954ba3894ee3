//! RoboCourier HTTP Server
//!
//! Main entry point for the control panel API server.

use std::sync::Arc;
use std::time::Duration;

use application::{ControlPanelService, PanelConfig};
use domain::value_objects::GeoLocation;
use infrastructure::{
    AppConfig, MapViewModel, NominatimGeocodingAdapter, OsrmRoutingAdapter, StatusBoard,
    init_telemetry,
};
use integration_geocoding::NominatimClient;
use integration_routing::OsrmClient;
use presentation_http::{routes, state::AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const BOOT_STATUS: &str = "App initialized. Ready for delivery instructions.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    info!("RoboCourier v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        geocoder = %config.geocoding.base_url,
        router = %config.routing.base_url,
        "Configuration loaded"
    );

    // Initialize external service clients
    let geocoding_client = NominatimClient::new(&config.geocoding)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding: {e}"))?;
    let routing_client = OsrmClient::new(&config.routing)
        .map_err(|e| anyhow::anyhow!("Failed to initialize routing: {e}"))?;

    // Initialize read models
    let initial_center = GeoLocation::new(config.panel.map.latitude, config.panel.map.longitude)
        .map_err(|e| anyhow::anyhow!("Invalid initial map center: {e}"))?;
    let map = Arc::new(MapViewModel::new(initial_center, config.panel.map.zoom));
    let status = Arc::new(StatusBoard::new(BOOT_STATUS));

    // Initialize the panel service
    let panel = ControlPanelService::new(
        PanelConfig::from(&config.panel),
        Arc::new(NominatimGeocodingAdapter::new(geocoding_client)),
        Arc::new(OsrmRoutingAdapter::new(routing_client)),
        Arc::clone(&map) as Arc<dyn application::ports::MapSurfacePort>,
        Arc::clone(&status) as Arc<dyn application::ports::StatusPort>,
    );

    let state = AppState {
        panel,
        map,
        status,
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(RequestBodyLimitLayer::new(16 * 1024));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting, this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!(?timeout, "Draining in-flight requests");
}
