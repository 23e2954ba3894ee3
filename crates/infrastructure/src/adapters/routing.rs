//! Routing port adapter

use async_trait::async_trait;
use application::error::ApplicationError;
use application::ports::{RoutePath, RouteProfile, RoutingPort};
use domain::value_objects::GeoLocation;
use integration_routing::{RoutePlan, RoutingClient, RoutingError};

/// Adapts a [`RoutingClient`] to the application's routing port
pub struct OsrmRoutingAdapter<C> {
    client: C,
}

impl<C: RoutingClient> OsrmRoutingAdapter<C> {
    /// Wrap a routing client
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: RoutingClient> RoutingPort for OsrmRoutingAdapter<C> {
    async fn route(
        &self,
        from: GeoLocation,
        to: GeoLocation,
        profile: RouteProfile,
    ) -> Result<RoutePath, ApplicationError> {
        let plan = self
            .client
            .route(from, to, profile.as_str())
            .await
            .map_err(map_error)?;
        Ok(convert_plan(plan))
    }
}

fn convert_plan(plan: RoutePlan) -> RoutePath {
    RoutePath {
        waypoints: plan.waypoints,
        distance_meters: plan.distance_meters,
        duration_secs: plan.duration_secs,
    }
}

fn map_error(error: RoutingError) -> ApplicationError {
    match error {
        RoutingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}
