//! Street routing integration for RoboCourier
//!
//! Computes drivable routes between two coordinates using an
//! [OSRM](https://project-osrm.org) routing backend (the public demo
//! server by default).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`RoutingClient`] defines the interface,
//! implemented by [`OsrmClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::value_objects::GeoLocation;
//! use integration_routing::{OsrmClient, OsrmConfig};
//!
//! let config = OsrmConfig::default();
//! let client = OsrmClient::new(&config)?;
//!
//! let from = GeoLocation::new(52.52, 13.41)?;
//! let to = GeoLocation::new(52.50, 13.33)?;
//! let plan = client.route(from, to, "driving").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OsrmClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::RoutingError;
pub use models::RoutePlan;
