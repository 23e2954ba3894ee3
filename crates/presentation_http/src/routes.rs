//! Route definitions

use axum::Router;
use axum::routing::{get, post};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Location picker (v1)
        .route("/v1/panel", get(handlers::panel::get_panel))
        .route("/v1/panel/pickup", post(handlers::panel::start_pickup))
        .route("/v1/panel/drop-off", post(handlers::panel::start_drop_off))
        .route("/v1/panel/query", post(handlers::panel::query_changed))
        .route("/v1/panel/choose", post(handlers::panel::choose_candidate))
        .route("/v1/panel/confirm", post(handlers::panel::confirm))
        .route("/v1/panel/cancel", post(handlers::panel::cancel))
        // Command dispatch (v1)
        .route("/v1/commands", post(handlers::commands::execute_command))
        // Robot actions (v1)
        .route(
            "/v1/robot/emergency-stop",
            post(handlers::robot::emergency_stop),
        )
        .route("/v1/robot/center", post(handlers::robot::center_on_robot))
        .route("/v1/robot/deliver", post(handlers::robot::simulate_delivery))
        // Read models
        .route("/v1/map", get(handlers::map::get_map))
        .route("/v1/status", get(handlers::status::get_status))
        // Attach state
        .with_state(state)
}
