//! Application layer for RoboCourier
//!
//! Defines the collaborator ports (geocoding, routing, map surface, status
//! reporting) and the control panel service: the selection state machine,
//! route synchronization, and the delivery simulation.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ControlPanelService, Debouncer, PanelConfig, PanelSnapshot};
