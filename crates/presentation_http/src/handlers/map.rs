//! Map read model handler

use axum::Json;
use axum::extract::State;
use infrastructure::MapSnapshot;

use crate::state::AppState;

/// Current map surface: view, markers, and route overlays
pub async fn get_map(State(state): State<AppState>) -> Json<MapSnapshot> {
    Json(state.map.snapshot())
}
