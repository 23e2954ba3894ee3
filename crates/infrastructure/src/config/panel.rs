//! Control panel configuration.

use application::PanelConfig;
use serde::{Deserialize, Serialize};

/// Control panel tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelAppConfig {
    /// Quiet period after the last keystroke before a search fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum trimmed query length that triggers a search
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Delay of the simulated delivery transition
    #[serde(default = "default_delivery_delay_ms")]
    pub delivery_delay_ms: u64,

    /// Zoom level used when centering on the robot
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    /// Initial map view shown before any locations are set
    #[serde(default)]
    pub map: MapViewConfig,
}

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_min_query_chars() -> usize {
    3
}

const fn default_delivery_delay_ms() -> u64 {
    3000
}

const fn default_focus_zoom() -> u8 {
    15
}

impl Default for PanelAppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_chars: default_min_query_chars(),
            delivery_delay_ms: default_delivery_delay_ms(),
            focus_zoom: default_focus_zoom(),
            map: MapViewConfig::default(),
        }
    }
}

impl From<&PanelAppConfig> for PanelConfig {
    fn from(config: &PanelAppConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            min_query_chars: config.min_query_chars,
            delivery_delay_ms: config.delivery_delay_ms,
            focus_zoom: config.focus_zoom,
        }
    }
}

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewConfig {
    /// Initial center latitude
    #[serde(default)]
    pub latitude: f64,

    /// Initial center longitude
    #[serde(default)]
    pub longitude: f64,

    /// Initial zoom level
    #[serde(default = "default_initial_zoom")]
    pub zoom: u8,
}

const fn default_initial_zoom() -> u8 {
    2
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            zoom: default_initial_zoom(),
        }
    }
}
