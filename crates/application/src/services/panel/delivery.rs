//! Delivery simulation
//!
//! A manually triggered, time-based transition standing in for real
//! telemetry: after a fixed delay the robot is reassigned to the drop-off.
//! No cancellation and no intermediate waypoints.

use std::time::Duration;

use domain::value_objects::{MarkerRole, Severity};
use tracing::{info, instrument, warn};

use super::ControlPanelService;
use crate::error::ApplicationError;

impl ControlPanelService {
    /// Start the simulated delivery
    ///
    /// # Errors
    ///
    /// Returns a precondition error unless both pickup and drop-off are
    /// set.
    #[instrument(skip(self))]
    pub fn simulate_delivery(&self) -> Result<(), ApplicationError> {
        if !self.state.lock().trip.route_ready() {
            self.status.report(
                "Please set pickup and drop locations first",
                Severity::Error,
            );
            return Err(ApplicationError::precondition(
                "delivery requires both pickup and drop-off locations",
            ));
        }

        self.status
            .report("Robot is moving to drop location", Severity::Info);

        let service = self.clone();
        let delay = Duration::from_millis(self.config.delivery_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            service.finish_delivery().await;
        });
        Ok(())
    }

    /// Complete the delivery once the timer fires
    async fn finish_delivery(&self) {
        let destination = {
            let mut state = self.state.lock();
            match state.trip.complete_delivery() {
                Ok(destination) => destination,
                Err(error) => {
                    // The trip cannot lose endpoints once set, but guard anyway
                    warn!(%error, "Delivery completion rejected");
                    return;
                },
            }
        };
        self.refresh_marker(MarkerRole::Robot, destination).await;
        info!(%destination, "Simulated delivery arrived");
        self.status.report("Delivery completed!", Severity::Success);
    }
}
