//! Panel commands - Strongly typed representations of UI intents
//!
//! Each variant maps 1:1 to a named transition of the selection state
//! machine or a robot action. Commands arrive from the browser panel via
//! the HTTP API; no behavior hides inside anonymous event handlers.

use serde::{Deserialize, Serialize};

/// All commands the control panel can issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelCommand {
    /// Open the pickup location picker
    StartPickup,

    /// Open the drop-off location picker
    StartDropOff,

    /// The picker query text changed
    QueryChanged {
        /// Current free-text query
        text: String,
    },

    /// Explicitly select a search candidate
    ChooseCandidate {
        /// Zero-based index into the ranked candidate list
        index: usize,
    },

    /// Confirm the chosen (or top-ranked) candidate
    Confirm,

    /// Close the picker without committing anything
    Cancel,

    /// Halt the robot immediately
    EmergencyStop,

    /// Re-center the map view on the robot
    CenterOnRobot,

    /// Run the timed delivery simulation
    SimulateDelivery,
}

impl PanelCommand {
    /// Get a human-readable description of the command
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StartPickup => "Start pickup selection".to_string(),
            Self::StartDropOff => "Start drop-off selection".to_string(),
            Self::QueryChanged { text } => {
                let preview: String = text.chars().take(40).collect();
                format!("Query changed: {preview}")
            },
            Self::ChooseCandidate { index } => format!("Choose candidate #{index}"),
            Self::Confirm => "Confirm location".to_string(),
            Self::Cancel => "Cancel location selection".to_string(),
            Self::EmergencyStop => "Emergency stop".to_string(),
            Self::CenterOnRobot => "Center on robot".to_string(),
            Self::SimulateDelivery => "Simulate delivery".to_string(),
        }
    }
}
