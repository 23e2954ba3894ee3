//! Location picker handlers
//!
//! Every command responds with the updated panel snapshot so a client
//! can re-render without a second round trip.

use application::PanelSnapshot;
use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for query updates
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Current text of the search box
    pub text: String,
}

/// Request body for candidate selection
#[derive(Debug, Deserialize)]
pub struct ChooseRequest {
    /// Zero-based index into the listed candidates
    pub index: usize,
}

/// Current panel snapshot
pub async fn get_panel(State(state): State<AppState>) -> Json<PanelSnapshot> {
    Json(state.panel.snapshot())
}

/// Open the picker for the pickup location
pub async fn start_pickup(State(state): State<AppState>) -> Json<PanelSnapshot> {
    state.panel.start_pickup();
    Json(state.panel.snapshot())
}

/// Open the picker for the drop-off location
pub async fn start_drop_off(State(state): State<AppState>) -> Json<PanelSnapshot> {
    state.panel.start_drop_off();
    Json(state.panel.snapshot())
}

/// Update the picker query text
pub async fn query_changed(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.query_changed(&request.text)?;
    Ok(Json(state.panel.snapshot()))
}

/// Choose a listed candidate
pub async fn choose_candidate(
    State(state): State<AppState>,
    Json(request): Json<ChooseRequest>,
) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.choose_candidate(request.index)?;
    Ok(Json(state.panel.snapshot()))
}

/// Confirm the current selection
pub async fn confirm(State(state): State<AppState>) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.confirm().await?;
    Ok(Json(state.panel.snapshot()))
}

/// Cancel the open picker
pub async fn cancel(State(state): State<AppState>) -> Json<PanelSnapshot> {
    state.panel.cancel();
    Json(state.panel.snapshot())
}
