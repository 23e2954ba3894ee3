//! Domain layer for RoboCourier
//!
//! Contains the trip and search-session entities, value objects, panel
//! commands, and domain errors. This layer has no knowledge of maps,
//! HTTP, or the geocoding/routing providers.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::PanelCommand;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
