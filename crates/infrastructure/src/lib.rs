//! Infrastructure layer for RoboCourier
//!
//! Provides the concrete adapters behind the application ports, the
//! configuration loader, and telemetry setup:
//! - `adapters`: geocoding and routing backends, the map view model,
//!   and the status board
//! - `config`: layered configuration (defaults, file, environment)
//! - `telemetry`: tracing subscriber initialization

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{
    MapSnapshot, MapViewModel, NominatimGeocodingAdapter, OsrmRoutingAdapter, StatusBoard,
    StatusSnapshot,
};
pub use config::{AppConfig, PanelAppConfig, ServerConfig};
pub use telemetry::init_telemetry;
