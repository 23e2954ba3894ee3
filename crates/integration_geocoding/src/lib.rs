//! Address search integration for RoboCourier
//!
//! Resolves free-form address queries to ranked location candidates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`GeocodingClient`] defines the search interface,
//! implemented by [`NominatimClient`] with rate limiting and caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{NominatimClient, NominatimConfig};
//!
//! let config = NominatimConfig::default();
//! let client = NominatimClient::new(&config)?;
//!
//! let candidates = client.search("alexanderplatz berlin").await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, NominatimClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
