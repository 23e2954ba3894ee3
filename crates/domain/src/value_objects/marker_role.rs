//! Marker role value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a map marker plays on the panel
///
/// Markers are derived state: one marker exists per set coordinate in the
/// trip, keyed by this role, and is destroyed and recreated whenever the
/// coordinate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// The user-chosen pickup location
    Pickup,
    /// The user-chosen drop-off location
    DropOff,
    /// The simulated robot position
    Robot,
}

impl MarkerRole {
    /// Human-readable label, used for marker popups
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup Location",
            Self::DropOff => "Drop Location",
            Self::Robot => "Robot Location",
        }
    }
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
