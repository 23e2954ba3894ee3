//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `panel`: control panel tunables and the initial map view
//!
//! Integration settings (`geocoding`, `routing`) reuse the config types
//! of the respective integration crates.

mod panel;
mod server;

use integration_geocoding::NominatimConfig;
use integration_routing::OsrmConfig;
use serde::{Deserialize, Serialize};

pub use panel::{MapViewConfig, PanelAppConfig};
pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Control panel settings
    #[serde(default)]
    pub panel: PanelAppConfig,

    /// Nominatim geocoding settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM routing settings
    #[serde(default)]
    pub routing: OsrmConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file, and
    /// `ROBOCOURIER_*` environment variables (in increasing precedence)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the merged
    /// configuration fails to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("ROBOCOURIER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
