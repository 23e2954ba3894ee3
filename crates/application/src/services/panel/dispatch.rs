//! Command dispatch
//!
//! Maps each [`PanelCommand`] to its service method, giving transports a
//! single typed entry point next to the per-method API.

use domain::PanelCommand;
use tracing::debug;

use super::ControlPanelService;
use crate::error::ApplicationError;

impl ControlPanelService {
    /// Execute a panel command
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation; commands without
    /// a failure mode always return `Ok`.
    pub async fn execute(&self, command: PanelCommand) -> Result<(), ApplicationError> {
        debug!(command = %command.description(), "Executing panel command");
        match command {
            PanelCommand::StartPickup => {
                self.start_pickup();
                Ok(())
            },
            PanelCommand::StartDropOff => {
                self.start_drop_off();
                Ok(())
            },
            PanelCommand::QueryChanged { text } => self.query_changed(&text),
            PanelCommand::ChooseCandidate { index } => self.choose_candidate(index),
            PanelCommand::Confirm => self.confirm().await,
            PanelCommand::Cancel => {
                self.cancel();
                Ok(())
            },
            PanelCommand::EmergencyStop => {
                self.emergency_stop();
                Ok(())
            },
            PanelCommand::CenterOnRobot => self.center_on_robot().await,
            PanelCommand::SimulateDelivery => self.simulate_delivery(),
        }
    }
}
