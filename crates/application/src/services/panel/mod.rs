//! Control panel service
//!
//! The core of the system: owns the trip state, the selection state
//! machine, route synchronization, and the delivery simulation. Every
//! panel command maps to one method here.
//!
//! Concurrency model: all state lives in a single `PanelState` behind a
//! mutex whose critical sections never span an await point. Background
//! work (the debounced search, the delivery timer) re-acquires the lock
//! when it fires and validates that its trigger is still current.

mod delivery;
mod dispatch;
mod robot;
mod route_sync;
mod selection;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::entities::{SearchResults, SearchSession, SelectionTarget, Trip};
use domain::value_objects::{GeoLocation, MarkerRole};
use parking_lot::Mutex;
use serde::Serialize;

use crate::ports::{GeocodingPort, MapSurfacePort, MarkerHandle, RouteHandle, RoutingPort, StatusPort};
use crate::services::debounce::Debouncer;

/// Tunables for the control panel
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
    /// Minimum trimmed query length that triggers a search
    pub min_query_chars: usize,
    /// Delay of the simulated delivery transition
    pub delivery_delay_ms: u64,
    /// Zoom level used when centering on the robot
    pub focus_zoom: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            min_query_chars: 3,
            delivery_delay_ms: 3000,
            focus_zoom: 15,
        }
    }
}

/// Mutable panel state, guarded by the service mutex
#[derive(Debug, Default)]
struct PanelState {
    trip: Trip,
    session: Option<SearchSession>,
    markers: HashMap<MarkerRole, MarkerHandle>,
    /// Bumped per marker role on every refresh; a refresh that finishes
    /// carrying an older generation discards its own marker.
    marker_generations: HashMap<MarkerRole, u64>,
    route: Option<RouteHandle>,
    /// Bumped on every route recomputation; a recomputation that finishes
    /// carrying an older generation discards its own overlay.
    route_generation: u64,
    /// Bumped whenever the session is replaced or closed; a completed
    /// search carrying an older epoch is discarded.
    epoch: u64,
}

/// Read-only view of the open picker
#[derive(Debug, Clone, Serialize)]
pub struct PickerSnapshot {
    /// Which trip slot is being selected
    pub target: SelectionTarget,
    /// Current query text
    pub query: String,
    /// Result state of the current query
    pub results: SearchResults,
}

/// Read-only view of the whole panel
#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    /// The trip record
    pub trip: Trip,
    /// The open picker, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker: Option<PickerSnapshot>,
}

/// The control panel service
///
/// Cloning is cheap; clones share the same state and ports.
#[derive(Clone)]
pub struct ControlPanelService {
    state: Arc<Mutex<PanelState>>,
    geocoding: Arc<dyn GeocodingPort>,
    routing: Arc<dyn RoutingPort>,
    map: Arc<dyn MapSurfacePort>,
    status: Arc<dyn StatusPort>,
    debouncer: Debouncer,
    config: PanelConfig,
}

impl fmt::Debug for ControlPanelService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPanelService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ControlPanelService {
    /// Create a new control panel service over the given collaborators
    #[must_use]
    pub fn new(
        config: PanelConfig,
        geocoding: Arc<dyn GeocodingPort>,
        routing: Arc<dyn RoutingPort>,
        map: Arc<dyn MapSurfacePort>,
        status: Arc<dyn StatusPort>,
    ) -> Self {
        let debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));
        Self {
            state: Arc::new(Mutex::new(PanelState::default())),
            geocoding,
            routing,
            map,
            status,
            debouncer,
            config,
        }
    }

    /// Take a read-only snapshot for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        let state = self.state.lock();
        PanelSnapshot {
            trip: state.trip,
            picker: state.session.as_ref().map(|session| PickerSnapshot {
                target: session.target(),
                query: session.query().to_string(),
                results: session.results().clone(),
            }),
        }
    }

    /// Destroy and recreate the marker for `role` at `location`
    ///
    /// Markers are value-keyed derived state: the handle for the old
    /// coordinate is removed before a new marker is placed. Overlapping
    /// refreshes of the same role commit only the newest one; a refresh
    /// superseded while its add was in flight removes its own marker.
    pub(crate) async fn refresh_marker(&self, role: MarkerRole, location: GeoLocation) {
        let (old, generation) = {
            let mut state = self.state.lock();
            let generation = state.marker_generations.entry(role).or_default();
            *generation += 1;
            let generation = *generation;
            (state.markers.remove(&role), generation)
        };
        if let Some(handle) = old {
            self.map.remove_marker(handle).await;
        }
        let handle = self.map.add_marker(location, role).await;
        let superseded = {
            let mut state = self.state.lock();
            if state.marker_generations.get(&role) == Some(&generation) {
                state.markers.insert(role, handle)
            } else {
                Some(handle)
            }
        };
        if let Some(handle) = superseded {
            self.map.remove_marker(handle).await;
        }
    }
}
