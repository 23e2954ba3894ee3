//! Server-side map view model
//!
//! Holds the state a map widget would render: the visible view, the
//! markers, and the route overlays. Handles are minted from a counter
//! and never reused, so a stale handle removal is a harmless no-op.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use application::ports::{MapSurfacePort, MarkerHandle, RouteHandle};
use domain::value_objects::{GeoLocation, MarkerRole};
use parking_lot::RwLock;
use serde::Serialize;

/// In-process implementation of the map surface port
pub struct MapViewModel {
    view: RwLock<ViewState>,
    next_handle: AtomicU64,
}

#[derive(Debug)]
struct ViewState {
    center: GeoLocation,
    zoom: u8,
    markers: BTreeMap<u64, (GeoLocation, MarkerRole)>,
    overlays: BTreeMap<u64, Vec<GeoLocation>>,
}

/// One marker as rendered on the map
#[derive(Debug, Clone, Serialize)]
pub struct MarkerSnapshot {
    /// Handle identifier
    pub id: u64,
    /// Marker position
    pub location: GeoLocation,
    /// What the marker represents
    pub role: MarkerRole,
}

/// One route overlay as rendered on the map
#[derive(Debug, Clone, Serialize)]
pub struct RouteOverlaySnapshot {
    /// Handle identifier
    pub id: u64,
    /// Overlay geometry
    pub waypoints: Vec<GeoLocation>,
}

/// Read-only view of the whole map surface
#[derive(Debug, Clone, Serialize)]
pub struct MapSnapshot {
    /// Visible view center
    pub center: GeoLocation,
    /// Visible zoom level
    pub zoom: u8,
    /// All placed markers, in placement order
    pub markers: Vec<MarkerSnapshot>,
    /// All drawn route overlays, in placement order
    pub routes: Vec<RouteOverlaySnapshot>,
}

impl MapViewModel {
    /// Create a view model showing the given initial view
    #[must_use]
    pub fn new(center: GeoLocation, zoom: u8) -> Self {
        Self {
            view: RwLock::new(ViewState {
                center,
                zoom,
                markers: BTreeMap::new(),
                overlays: BTreeMap::new(),
            }),
            next_handle: AtomicU64::new(1),
        }
    }

    fn mint_handle(&self) -> u64 {
        self.next_handle.fetch_add(1, Ordering::Relaxed)
    }

    /// Take a read-only snapshot for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        let view = self.view.read();
        MapSnapshot {
            center: view.center,
            zoom: view.zoom,
            markers: view
                .markers
                .iter()
                .map(|(&id, &(location, role))| MarkerSnapshot { id, location, role })
                .collect(),
            routes: view
                .overlays
                .iter()
                .map(|(&id, waypoints)| RouteOverlaySnapshot {
                    id,
                    waypoints: waypoints.clone(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl MapSurfacePort for MapViewModel {
    async fn set_view(&self, center: GeoLocation, zoom: u8) {
        let mut view = self.view.write();
        view.center = center;
        view.zoom = zoom;
    }

    async fn add_marker(&self, location: GeoLocation, role: MarkerRole) -> MarkerHandle {
        let id = self.mint_handle();
        self.view.write().markers.insert(id, (location, role));
        MarkerHandle(id)
    }

    async fn remove_marker(&self, handle: MarkerHandle) {
        self.view.write().markers.remove(&handle.0);
    }

    async fn add_route_overlay(&self, waypoints: &[GeoLocation]) -> RouteHandle {
        let id = self.mint_handle();
        self.view.write().overlays.insert(id, waypoints.to_vec());
        RouteHandle(id)
    }

    async fn remove_route_overlay(&self, handle: RouteHandle) {
        self.view.write().overlays.remove(&handle.0);
    }
}
