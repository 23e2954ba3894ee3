//! Command dispatch handler
//!
//! Accepts any [`PanelCommand`] as a tagged JSON body, as an alternative
//! to the per-command routes.

use application::PanelSnapshot;
use axum::Json;
use axum::extract::State;
use domain::PanelCommand;

use crate::error::ApiError;
use crate::state::AppState;

/// Execute a panel command
pub async fn execute_command(
    State(state): State<AppState>,
    Json(command): Json<PanelCommand>,
) -> Result<Json<PanelSnapshot>, ApiError> {
    state.panel.execute(command).await?;
    Ok(Json(state.panel.snapshot()))
}
