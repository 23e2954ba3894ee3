//! Robot action handlers

use application::PanelSnapshot;
use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// Halt the robot immediately
pub async fn emergency_stop(State(state): State<AppState>) -> Json<PanelSnapshot> {
    state.panel.emergency_stop();
    Json(state.panel.snapshot())
}

/// Re-center the map on the robot
pub async fn center_on_robot(
    State(state): State<AppState>,
) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.center_on_robot().await?;
    Ok(Json(state.panel.snapshot()))
}

/// Start the simulated delivery
pub async fn simulate_delivery(
    State(state): State<AppState>,
) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.simulate_delivery()?;
    Ok(Json(state.panel.snapshot()))
}
