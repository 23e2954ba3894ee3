//! Robot actions outside the selection flow

use domain::value_objects::Severity;
use tracing::{info, instrument};

use super::ControlPanelService;
use crate::error::ApplicationError;

impl ControlPanelService {
    /// Halt the robot immediately
    ///
    /// Purely a reported event: the simulation has no motion model to
    /// stop, and a running delivery timer is not cancellable.
    #[instrument(skip(self))]
    pub fn emergency_stop(&self) {
        info!("Emergency stop requested");
        self.status.report(
            "EMERGENCY STOP ACTIVATED! Robot has stopped.",
            Severity::Error,
        );
    }

    /// Re-center the map view on the robot
    ///
    /// # Errors
    ///
    /// Returns a precondition error before any pickup has been set.
    #[instrument(skip(self))]
    pub async fn center_on_robot(&self) -> Result<(), ApplicationError> {
        let Some(robot) = self.state.lock().trip.robot() else {
            self.status.report(
                "Robot location not set. Please select a pickup location first.",
                Severity::Error,
            );
            return Err(ApplicationError::precondition("robot location not set"));
        };

        self.map.set_view(robot, self.config.focus_zoom).await;
        self.status
            .report("Showing current robot location", Severity::Info);
        Ok(())
    }
}
