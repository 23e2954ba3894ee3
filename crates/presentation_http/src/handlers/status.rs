//! Status line read model handler

use axum::Json;
use axum::extract::State;
use infrastructure::StatusSnapshot;

use crate::state::AppState;

/// Latest one-line panel status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.status.snapshot())
}
