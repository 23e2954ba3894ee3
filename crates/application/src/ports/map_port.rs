//! Map surface port
//!
//! Defines the interface to the tile-map widget: view control, markers,
//! and the route overlay. Handles are opaque tokens minted by the adapter;
//! the panel never mutates a marker in place, it removes and re-adds.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, MarkerRole};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Opaque handle to a marker on the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub u64);

/// Opaque handle to a route overlay on the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteHandle(pub u64);

/// Port for the tile-based map widget
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MapSurfacePort: Send + Sync {
    /// Move the visible map view
    async fn set_view(&self, center: GeoLocation, zoom: u8);

    /// Place a marker and return its handle
    async fn add_marker(&self, location: GeoLocation, role: MarkerRole) -> MarkerHandle;

    /// Remove a previously placed marker
    ///
    /// Removing an already-removed handle is a no-op.
    async fn remove_marker(&self, handle: MarkerHandle);

    /// Draw a route overlay through the given waypoints
    async fn add_route_overlay(&self, waypoints: &[GeoLocation]) -> RouteHandle;

    /// Remove a previously drawn route overlay
    async fn remove_route_overlay(&self, handle: RouteHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MapSurfacePort) {}

    #[test]
    fn handles_compare_by_value() {
        assert_eq!(MarkerHandle(1), MarkerHandle(1));
        assert_ne!(RouteHandle(1), RouteHandle(2));
    }
}
