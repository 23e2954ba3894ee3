//! Application ports - Interfaces to external collaborators
//!
//! Adapters in the infrastructure layer implement these ports over the
//! actual geocoding/routing web services and the map view model.

mod geocoding_port;
mod map_port;
mod routing_port;
mod status_port;

pub use geocoding_port::GeocodingPort;
pub use map_port::{MapSurfacePort, MarkerHandle, RouteHandle};
pub use routing_port::{RoutePath, RouteProfile, RoutingPort};
pub use status_port::StatusPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use map_port::MockMapSurfacePort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
#[cfg(test)]
pub use status_port::MockStatusPort;
