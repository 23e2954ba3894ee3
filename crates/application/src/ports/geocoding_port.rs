//! Geocoding port
//!
//! Defines the interface for free-text location search. The adapter wraps
//! a third-party address-search provider.

use async_trait::async_trait;
use domain::entities::Candidate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for free-text location search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for locations matching the query
    ///
    /// Returns ranked candidates in provider order; an empty vector is a
    /// completed search with zero hits, not an error.
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ApplicationError>;
}
