//! Selection state machine
//!
//! Picker transitions: opening a picker, debounced query search, explicit
//! candidate choice, confirm, and cancel. Committing a confirmed location
//! mutates the trip, recreates the affected markers, and triggers route
//! recomputation once both endpoints are set.

use domain::entities::{SearchSession, SelectionTarget};
use domain::value_objects::{MarkerRole, Severity};
use tracing::{debug, info, instrument, warn};

use super::ControlPanelService;
use crate::error::ApplicationError;

impl ControlPanelService {
    /// Open the pickup location picker
    pub fn start_pickup(&self) {
        self.open_picker(SelectionTarget::Pickup);
    }

    /// Open the drop-off location picker
    pub fn start_drop_off(&self) {
        self.open_picker(SelectionTarget::DropOff);
    }

    /// Replace any prior session with a fresh one for `target`
    ///
    /// Cancels a pending search timer from the previous session; the epoch
    /// bump guarantees that an already in-flight search cannot land either.
    #[instrument(skip(self))]
    fn open_picker(&self, target: SelectionTarget) {
        {
            let mut state = self.state.lock();
            state.session = Some(SearchSession::new(target));
            state.epoch += 1;
        }
        self.debouncer.cancel();
        info!(target = target.label(), "Location picker opened");
        self.status
            .report(&format!("Enter {} location", target.label()), Severity::Info);
    }

    /// Handle a query text change in the open picker
    ///
    /// Queries shorter than the minimum length clear the candidate list
    /// without searching. Longer queries arm the debounce timer; each new
    /// keystroke restarts it, so only the final quiescent text is searched.
    #[instrument(skip(self, text))]
    pub fn query_changed(&self, text: &str) -> Result<(), ApplicationError> {
        let (target, epoch) = {
            let mut state = self.state.lock();
            let session = state
                .session
                .as_mut()
                .ok_or_else(|| ApplicationError::precondition("no location picker is open"))?;
            session.set_query(text);
            if !session.query_searchable(self.config.min_query_chars) {
                debug!("Query below minimum length, skipping search");
                drop(state);
                self.debouncer.cancel();
                return Ok(());
            }
            let target = session.target();
            (target, state.epoch)
        };

        let service = self.clone();
        let query = text.to_string();
        self.debouncer.schedule(async move {
            service.run_search(target, query, epoch).await;
        });
        Ok(())
    }

    /// Execute a debounced search and commit its results if still current
    async fn run_search(&self, target: SelectionTarget, query: String, epoch: u64) {
        debug!(%query, "Searching for location candidates");
        match self.geocoding.search(&query).await {
            Ok(candidates) => {
                let mut state = self.state.lock();
                let current = state.epoch == epoch
                    && state
                        .session
                        .as_ref()
                        .is_some_and(|session| session.matches(target, &query));
                if !current {
                    debug!(%query, "Discarding stale search results");
                    return;
                }
                let count = candidates.len();
                if let Some(session) = state.session.as_mut() {
                    session.record_results(candidates);
                }
                drop(state);
                debug!(%query, count, "Search results recorded");
            },
            Err(error) => {
                warn!(%query, %error, "Location search failed");
                self.status.report("Location search failed", Severity::Error);
            },
        }
    }

    /// Explicitly select a search candidate by index
    #[instrument(skip(self))]
    pub fn choose_candidate(&self, index: usize) -> Result<(), ApplicationError> {
        let mut state = self.state.lock();
        let session = state
            .session
            .as_mut()
            .ok_or_else(|| ApplicationError::precondition("no location picker is open"))?;
        let candidate = session.choose(index)?;
        debug!(index, label = %candidate.label, "Candidate chosen");
        Ok(())
    }

    /// Confirm the chosen candidate, or the top-ranked one when nothing
    /// was explicitly chosen
    ///
    /// On success the picker closes and the location is committed to the
    /// trip; confirming a pickup also places the robot there.
    #[instrument(skip(self))]
    pub async fn confirm(&self) -> Result<(), ApplicationError> {
        let (target, candidate, route_ready) = {
            let mut state = self.state.lock();
            let Some(session) = state.session.as_ref() else {
                return Err(ApplicationError::precondition("no location picker is open"));
            };
            if session.query().trim().is_empty() {
                drop(state);
                return Err(self.reject("Please enter a location"));
            }
            let Some(candidate) = session.confirmable().cloned() else {
                drop(state);
                return Err(self.reject("Please select a location from the search results"));
            };
            let target = session.target();
            state.session = None;
            state.epoch += 1;
            match target {
                SelectionTarget::Pickup => state.trip.set_pickup(candidate.location),
                SelectionTarget::DropOff => state.trip.set_drop_off(candidate.location),
            }
            (target, candidate, state.trip.route_ready())
        };
        self.debouncer.cancel();

        match target {
            SelectionTarget::Pickup => {
                self.refresh_marker(MarkerRole::Pickup, candidate.location).await;
                self.refresh_marker(MarkerRole::Robot, candidate.location).await;
                self.status.report("Pickup location set!", Severity::Success);
            },
            SelectionTarget::DropOff => {
                self.refresh_marker(MarkerRole::DropOff, candidate.location).await;
                self.status.report("Drop location set!", Severity::Success);
            },
        }
        info!(
            target = target.label(),
            label = %candidate.short_label(),
            location = %candidate.location,
            "Location committed"
        );

        if route_ready {
            self.recompute_route().await;
        }
        Ok(())
    }

    /// Close the picker without committing anything
    ///
    /// Never mutates the trip. Harmless when no picker is open.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        {
            let mut state = self.state.lock();
            state.session = None;
            state.epoch += 1;
        }
        self.debouncer.cancel();
        self.status
            .report("Location selection cancelled", Severity::Info);
    }

    /// Report a validation failure and build the matching error
    fn reject(&self, message: &str) -> ApplicationError {
        self.status.report(message, Severity::Error);
        ApplicationError::validation(message)
    }
}
