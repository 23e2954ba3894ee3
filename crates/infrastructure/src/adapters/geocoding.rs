//! Geocoding port adapter

use async_trait::async_trait;
use application::error::ApplicationError;
use application::ports::GeocodingPort;
use domain::entities::Candidate;
use integration_geocoding::{GeocodingClient, GeocodingError};

/// Adapts a [`GeocodingClient`] to the application's geocoding port
pub struct NominatimGeocodingAdapter<C> {
    client: C,
}

impl<C: GeocodingClient> NominatimGeocodingAdapter<C> {
    /// Wrap a geocoding client
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: GeocodingClient> GeocodingPort for NominatimGeocodingAdapter<C> {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ApplicationError> {
        self.client.search(query).await.map_err(map_error)
    }
}

fn map_error(error: GeocodingError) -> ApplicationError {
    match error {
        GeocodingError::EmptyQuery => ApplicationError::validation(error.to_string()),
        GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}
