//! Routing port
//!
//! Defines the interface for computing a drawable path between two
//! coordinates. The adapter wraps a third-party routing service.

use std::fmt;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Routing profile for path computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteProfile {
    /// Road route for a driving robot
    #[default]
    Driving,
    /// Pedestrian route
    Walking,
}

impl RouteProfile {
    /// Identifier used by routing services
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A computed route between two coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Path geometry, ordered from origin to destination
    pub waypoints: Vec<GeoLocation>,
    /// Total length in meters
    pub distance_meters: f64,
    /// Estimated travel time in seconds
    pub duration_secs: f64,
}

/// Port for route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute a route from `from` to `to` for the given profile
    async fn route(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: RouteProfile,
    ) -> Result<RoutePath, ApplicationError>;
}
