//! Value objects - Immutable domain primitives

mod geo_location;
mod marker_role;
mod severity;

pub use geo_location::GeoLocation;
pub use marker_role::MarkerRole;
pub use severity::Severity;
