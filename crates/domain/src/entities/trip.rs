//! Trip entity - the single source of truth for the simulated delivery
//!
//! Invariants:
//! - The robot location is unset until a pickup is set; setting the pickup
//!   places the robot there.
//! - Completing a delivery moves the robot to the drop-off.
//! - A route exists if and only if both pickup and drop-off are set
//!   (`route_ready`).

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// The in-memory record of the current delivery task
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pickup: Option<GeoLocation>,
    drop_off: Option<GeoLocation>,
    robot: Option<GeoLocation>,
}

impl Trip {
    /// Create an empty trip with no locations set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pickup: None,
            drop_off: None,
            robot: None,
        }
    }

    /// The pickup location, if chosen
    #[must_use]
    pub const fn pickup(&self) -> Option<GeoLocation> {
        self.pickup
    }

    /// The drop-off location, if chosen
    #[must_use]
    pub const fn drop_off(&self) -> Option<GeoLocation> {
        self.drop_off
    }

    /// The current robot location, if placed
    #[must_use]
    pub const fn robot(&self) -> Option<GeoLocation> {
        self.robot
    }

    /// Set the pickup location
    ///
    /// The robot is placed at the pickup until a delivery completes.
    pub fn set_pickup(&mut self, location: GeoLocation) {
        self.pickup = Some(location);
        self.robot = Some(location);
    }

    /// Set the drop-off location
    pub fn set_drop_off(&mut self, location: GeoLocation) {
        self.drop_off = Some(location);
    }

    /// True when both endpoints are set and a route can be computed
    #[must_use]
    pub const fn route_ready(&self) -> bool {
        self.pickup.is_some() && self.drop_off.is_some()
    }

    /// Move the robot to the drop-off, completing the simulated delivery
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless both pickup and
    /// drop-off are set.
    pub fn complete_delivery(&mut self) -> Result<GeoLocation, DomainError> {
        match (self.pickup, self.drop_off) {
            (Some(_), Some(destination)) => {
                self.robot = Some(destination);
                Ok(destination)
            },
            _ => Err(DomainError::InvalidTransition(
                "delivery requires both pickup and drop-off locations".to_string(),
            )),
        }
    }
}
