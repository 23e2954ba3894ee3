//! RoboCourier HTTP presentation layer
//!
//! Exposes the control panel over a JSON API: panel commands under
//! `/v1/panel` and `/v1/robot`, read models under `/v1/panel`, `/v1/map`
//! and `/v1/status`.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
