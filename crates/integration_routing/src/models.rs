//! Typed routing models

use domain::value_objects::GeoLocation;
use serde::Serialize;

/// A computed route between two endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Route geometry, ordered from origin to destination
    pub waypoints: Vec<GeoLocation>,
    /// Total route length in meters
    pub distance_meters: f64,
    /// Estimated travel time in seconds
    pub duration_secs: f64,
}

impl RoutePlan {
    /// Route length in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}
