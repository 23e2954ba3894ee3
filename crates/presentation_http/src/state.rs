//! Application state shared across handlers

use std::sync::Arc;

use application::ControlPanelService;
use infrastructure::{MapViewModel, StatusBoard};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The control panel service handling all commands
    pub panel: ControlPanelService,
    /// Map read model
    pub map: Arc<MapViewModel>,
    /// Status line read model
    pub status: Arc<StatusBoard>,
}
