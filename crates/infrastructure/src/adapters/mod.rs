//! Port adapters
//!
//! Concrete implementations of the application ports: external service
//! clients (Nominatim, OSRM) and in-process state (map view model,
//! status board).

mod geocoding;
mod map_view;
mod routing;
mod status;

pub use geocoding::NominatimGeocodingAdapter;
pub use map_view::{MapSnapshot, MapViewModel, MarkerSnapshot, RouteOverlaySnapshot};
pub use routing::OsrmRoutingAdapter;
pub use status::{StatusBoard, StatusSnapshot};
