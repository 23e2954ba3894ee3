//! OSRM routing client
//!
//! Talks to the OSRM HTTP API (`/route/v1`) and converts GeoJSON route
//! geometry into validated domain coordinates.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::OsrmConfig;
use crate::error::RoutingError;
use crate::models::RoutePlan;

/// Trait for routing service clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute a route between two coordinates
    ///
    /// `profile` selects the OSRM travel profile, e.g. "driving" or
    /// "walking".
    async fn route(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: &str,
    ) -> Result<RoutePlan, RoutingError>;
}

/// OSRM-based routing client
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmClient {
    /// Create a new OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RoboCourier/1.0 (delivery robot control panel)")
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw OSRM JSON response into a typed route plan
    fn parse_route_response(body: &str) -> Result<RoutePlan, RoutingError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        if raw.code != "Ok" {
            let detail = raw.message.unwrap_or(raw.code);
            return Err(RoutingError::NoRouteFound(detail));
        }

        let route = raw
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRouteFound("empty route list".to_string()))?;

        // GeoJSON coordinate order is [longitude, latitude]
        let waypoints = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| {
                GeoLocation::new(lat, lon).map_err(|e| RoutingError::ParseError(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoutePlan {
            waypoints,
            distance_meters: route.distance,
            duration_secs: route.duration,
        })
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    #[instrument(skip(self), fields(%from, %to))]
    async fn route(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: &str,
    ) -> Result<RoutePlan, RoutingError> {
        // OSRM expects longitude,latitude pairs in the path
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.config.base_url,
            profile,
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        );

        let params = [("overview", "full"), ("geometries", "geojson")];

        debug!(%profile, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        // OSRM reports routing failures as 400 with a JSON error code
        if !status.is_success() && status != reqwest::StatusCode::BAD_REQUEST {
            return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
        }

        let plan = Self::parse_route_response(&body)?;
        debug!(
            waypoints = plan.waypoints.len(),
            distance_meters = plan.distance_meters,
            "Route computed"
        );
        Ok(plan)
    }
}

/// Raw OSRM API response
#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    geometry: RawGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<[f64; 2]>,
}
