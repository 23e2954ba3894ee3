//! Route synchronization
//!
//! Keeps the displayed route overlay consistent with the trip endpoints.
//! At most one overlay exists at any time; a failed recomputation leaves
//! no overlay displayed rather than a stale one.

use domain::value_objects::{MarkerRole, Severity};
use tracing::{debug, instrument, warn};

use super::ControlPanelService;
use crate::ports::RouteProfile;

impl ControlPanelService {
    /// Recompute and redraw the route between pickup and drop-off
    ///
    /// Requires both endpoints; a no-op otherwise. The previous overlay is
    /// removed before the routing call, so a collaborator failure cannot
    /// leave an outdated route on the map. Overlapping recomputations
    /// commit only the newest one: a recomputation superseded while its
    /// routing request was in flight removes its own overlay instead of
    /// displaying it. Failures are reported through the status port and
    /// never abort the calling transition.
    #[instrument(skip(self))]
    pub(crate) async fn recompute_route(&self) {
        let (endpoints, robot, old_overlay, generation) = {
            let mut state = self.state.lock();
            state.route_generation += 1;
            (
                state.trip.pickup().zip(state.trip.drop_off()),
                state.trip.robot(),
                state.route.take(),
                state.route_generation,
            )
        };

        if let Some(handle) = old_overlay {
            self.map.remove_route_overlay(handle).await;
        }
        let Some((pickup, drop_off)) = endpoints else {
            debug!("Route recomputation skipped, endpoints incomplete");
            return;
        };

        match self.routing.route(pickup, drop_off, RouteProfile::Driving).await {
            Ok(path) => {
                debug!(
                    waypoints = path.waypoints.len(),
                    distance_meters = path.distance_meters,
                    "Route computed"
                );
                let handle = self.map.add_route_overlay(&path.waypoints).await;
                let committed = {
                    let mut state = self.state.lock();
                    if state.route_generation == generation {
                        state.route = Some(handle);
                        true
                    } else {
                        false
                    }
                };
                if !committed {
                    debug!("Route superseded by a newer recomputation");
                    self.map.remove_route_overlay(handle).await;
                    return;
                }
                if let Some(robot) = robot {
                    self.refresh_marker(MarkerRole::Robot, robot).await;
                }
                self.status.report(
                    "Route calculated! Robot is ready for delivery.",
                    Severity::Success,
                );
            },
            Err(error) => {
                warn!(%error, "Route computation failed");
                if self.state.lock().route_generation == generation {
                    self.status
                        .report("Could not calculate route", Severity::Error);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    use domain::entities::Candidate;
    use domain::value_objects::GeoLocation;
    use mockall::predicate::eq;

    use super::super::testkit::{permissive_map, quiet_status, service, settle};
    use super::super::PanelConfig;
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{
        MarkerHandle, MockGeocodingPort, MockMapSurfacePort, MockRoutingPort, RouteHandle,
        RoutePath, RoutingPort,
    };

    fn loc(lat: f64, lon: f64) -> GeoLocation {
        GeoLocation::new(lat, lon).expect("valid coordinates")
    }

    fn geocoder_for(pickup: GeoLocation, drop_off: GeoLocation) -> MockGeocodingPort {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_search().withf(|query| query == "pickup spot").returning(move |_| {
            Ok(vec![Candidate {
                label: "Pickup Spot".to_string(),
                location: pickup,
            }])
        });
        geocoding.expect_search().withf(|query| query == "drop spot").returning(move |_| {
            Ok(vec![Candidate {
                label: "Drop Spot".to_string(),
                location: drop_off,
            }])
        });
        geocoding
    }

    async fn pick_both(panel: &ControlPanelService) {
        panel.start_pickup();
        panel.query_changed("pickup spot").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("pickup confirmable");

        panel.start_drop_off();
        panel.query_changed("drop spot").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("drop confirmable");
    }

    fn happy_routing(path_len: usize) -> MockRoutingPort {
        let mut routing = MockRoutingPort::new();
        routing.expect_route().returning(move |from, to, _| {
            let mut waypoints = vec![from];
            waypoints.extend(std::iter::repeat_n(to, path_len.saturating_sub(1)));
            Ok(RoutePath {
                waypoints,
                distance_meters: 1000.0,
                duration_secs: 120.0,
            })
        });
        routing
    }

    #[tokio::test(start_paused = true)]
    async fn setting_both_endpoints_draws_exactly_one_overlay() {
        let overlays = Arc::new(AtomicU64::new(0));
        let mut map = MockMapSurfacePort::new();
        let marker_ids = AtomicU64::new(1);
        map.expect_add_marker()
            .returning(move |_, _| MarkerHandle(marker_ids.fetch_add(1, Ordering::SeqCst)));
        map.expect_remove_marker().returning(|_| ());
        let adds = Arc::clone(&overlays);
        map.expect_add_route_overlay().times(1).returning(move |_| {
            adds.fetch_add(1, Ordering::SeqCst);
            RouteHandle(1)
        });
        // Nothing to remove the first time
        map.expect_remove_route_overlay().times(0);

        let panel = service(
            geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0)),
            happy_routing(3),
            map,
            quiet_status(),
        );
        pick_both(&panel).await;
        assert_eq!(overlays.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn recomputation_replaces_the_previous_overlay() {
        // Track overlay lifecycle precisely
        let mut map = MockMapSurfacePort::new();
        let marker_ids = AtomicU64::new(1);
        map.expect_add_marker()
            .returning(move |_, _| MarkerHandle(marker_ids.fetch_add(1, Ordering::SeqCst)));
        map.expect_remove_marker().returning(|_| ());
        let overlay_ids = AtomicU64::new(1);
        map.expect_add_route_overlay()
            .times(2)
            .returning(move |_| RouteHandle(overlay_ids.fetch_add(1, Ordering::SeqCst)));
        // The second recomputation must remove the first overlay
        map.expect_remove_route_overlay()
            .with(eq(RouteHandle(1)))
            .times(1)
            .returning(|_| ());

        let mut geocoding = geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0));
        geocoding
            .expect_search()
            .withf(|query| query == "new drop")
            .returning(|_| {
                Ok(vec![Candidate {
                    label: "New Drop".to_string(),
                    location: loc(21.0, 21.0),
                }])
            });

        let panel = service(geocoding, happy_routing(2), map, quiet_status());
        pick_both(&panel).await;

        // Re-picking the drop-off recomputes and replaces the overlay
        panel.start_drop_off();
        panel.query_changed("new drop").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("drop confirmable");
    }

    /// Router whose first request parks until virtual time advances
    struct StaggeredRouter {
        calls: AtomicU64,
    }

    #[async_trait::async_trait]
    impl RoutingPort for StaggeredRouter {
        async fn route(
            &self,
            from: GeoLocation,
            to: GeoLocation,
            _profile: RouteProfile,
        ) -> Result<RoutePath, ApplicationError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(RoutePath {
                waypoints: vec![from, to],
                distance_meters: 1000.0,
                duration_secs: 120.0,
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_recomputations_keep_a_single_overlay() {
        let mut map = MockMapSurfacePort::new();
        let marker_ids = AtomicU64::new(1);
        map.expect_add_marker()
            .returning(move |_, _| MarkerHandle(marker_ids.fetch_add(1, Ordering::SeqCst)));
        map.expect_remove_marker().returning(|_| ());
        let overlay_ids = AtomicU64::new(1);
        map.expect_add_route_overlay()
            .times(2)
            .returning(move |_| RouteHandle(overlay_ids.fetch_add(1, Ordering::SeqCst)));
        // Only the late, superseded overlay may be removed; removing the
        // committed one would trip the matcher
        map.expect_remove_route_overlay()
            .with(eq(RouteHandle(2)))
            .times(1)
            .returning(|_| ());

        let mut geocoding = geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0));
        geocoding
            .expect_search()
            .withf(|query| query == "new drop")
            .returning(|_| {
                Ok(vec![Candidate {
                    label: "New Drop".to_string(),
                    location: loc(21.0, 21.0),
                }])
            });

        let panel = ControlPanelService::new(
            PanelConfig::default(),
            Arc::new(geocoding),
            Arc::new(StaggeredRouter {
                calls: AtomicU64::new(0),
            }),
            Arc::new(map),
            Arc::new(quiet_status()),
        );

        panel.start_pickup();
        panel.query_changed("pickup spot").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("pickup confirmable");

        // The first drop-off confirm parks on the slow routing request
        panel.start_drop_off();
        panel.query_changed("drop spot").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        let slow = tokio::spawn({
            let panel = panel.clone();
            async move { panel.confirm().await }
        });
        settle().await;

        // Re-pick the drop-off while that request is still in flight
        panel.start_drop_off();
        panel.query_changed("new drop").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("drop confirmable");

        // Let the slow request resolve; its overlay is stale by now
        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        slow.await.expect("confirm task").expect("drop confirmable");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_route_leaves_no_overlay_displayed() {
        let mut map = MockMapSurfacePort::new();
        let marker_ids = AtomicU64::new(1);
        map.expect_add_marker()
            .returning(move |_, _| MarkerHandle(marker_ids.fetch_add(1, Ordering::SeqCst)));
        map.expect_remove_marker().returning(|_| ());
        map.expect_add_route_overlay()
            .times(1)
            .returning(|_| RouteHandle(7));
        // The failing recomputation must still clear the old overlay
        map.expect_remove_route_overlay()
            .with(eq(RouteHandle(7)))
            .times(1)
            .returning(|_| ());

        let mut routing = MockRoutingPort::new();
        routing.expect_route().times(1).returning(|from, to, _| {
            Ok(RoutePath {
                waypoints: vec![from, to],
                distance_meters: 1000.0,
                duration_secs: 120.0,
            })
        });
        routing.expect_route().returning(|_, _, _| {
            Err(ApplicationError::ExternalService("routing down".to_string()))
        });

        let mut geocoding = geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0));
        geocoding
            .expect_search()
            .withf(|query| query == "new drop")
            .returning(|_| {
                Ok(vec![Candidate {
                    label: "New Drop".to_string(),
                    location: loc(21.0, 21.0),
                }])
            });

        let panel = service(geocoding, routing, map, quiet_status());
        pick_both(&panel).await;

        panel.start_drop_off();
        panel.query_changed("new drop").expect("picker open");
        settle().await;
        tokio::time::advance(Duration::from_millis(501)).await;
        settle().await;
        panel.confirm().await.expect("drop confirmable");
        // add_route_overlay was limited to one call; a second draw would
        // have tripped the mock
    }

    #[tokio::test(start_paused = true)]
    async fn route_failure_reports_error_status() {
        let mut routing = MockRoutingPort::new();
        routing.expect_route().returning(|_, _, _| {
            Err(ApplicationError::ExternalService("routing down".to_string()))
        });

        let mut status = crate::ports::MockStatusPort::new();
        status
            .expect_report()
            .withf(|message, severity| message == "Could not calculate route" && *severity == Severity::Error)
            .times(1)
            .returning(|_, _| ());
        status.expect_report().returning(|_, _| ());

        let panel = service(
            geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0)),
            routing,
            permissive_map(),
            status,
        );
        pick_both(&panel).await;
        assert!(panel.snapshot().trip.route_ready());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_route_repositions_robot_to_pickup() {
        let mut map = MockMapSurfacePort::new();
        let marker_ids = AtomicU64::new(1);
        let robot_positions = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let seen = Arc::clone(&robot_positions);
        map.expect_add_marker().returning(move |location, role| {
            if role == MarkerRole::Robot {
                seen.lock().push(location);
            }
            MarkerHandle(marker_ids.fetch_add(1, Ordering::SeqCst))
        });
        map.expect_remove_marker().returning(|_| ());
        map.expect_add_route_overlay().returning(|_| RouteHandle(1));
        map.expect_remove_route_overlay().returning(|_| ());

        let panel = service(
            geocoder_for(loc(10.0, 10.0), loc(20.0, 20.0)),
            happy_routing(2),
            map,
            quiet_status(),
        );
        pick_both(&panel).await;

        let positions = robot_positions.lock();
        let last = positions.last().expect("robot marker placed");
        assert_eq!(*last, loc(10.0, 10.0));
    }
}
