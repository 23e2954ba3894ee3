//! Property-based tests for domain entities
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::entities::{
    Candidate, MAX_CANDIDATES, SearchResults, SearchSession, SelectionTarget, Trip,
};
use domain::value_objects::GeoLocation;
use proptest::prelude::*;

fn arb_location() -> impl Strategy<Value = GeoLocation> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(lat, lon)| GeoLocation::new(lat, lon).expect("in-range coordinates"))
}

fn arb_candidates(max: usize) -> impl Strategy<Value = Vec<Candidate>> {
    proptest::collection::vec(
        ("[a-zA-Z ,]{1,60}", arb_location())
            .prop_map(|(label, location)| Candidate { label, location }),
        0..=max,
    )
}

mod search_session_tests {
    use super::*;

    proptest! {
        #[test]
        fn recorded_results_never_exceed_the_cap(candidates in arb_candidates(20)) {
            let mut session = SearchSession::new(SelectionTarget::Pickup);
            session.set_query("somewhere");
            session.record_results(candidates.clone());

            match session.results() {
                SearchResults::Ranked { candidates: kept } => {
                    prop_assert!(kept.len() <= MAX_CANDIDATES);
                    prop_assert_eq!(&candidates[..kept.len()], &kept[..]);
                }
                SearchResults::Empty => prop_assert!(candidates.is_empty()),
                SearchResults::NotSearched => prop_assert!(false, "results were recorded"),
            }
        }

        #[test]
        fn any_keystroke_clears_results_and_choice(
            candidates in arb_candidates(5),
            new_query in ".{0,40}",
        ) {
            let mut session = SearchSession::new(SelectionTarget::DropOff);
            session.set_query("first query");
            session.record_results(candidates);
            let _ = session.choose(0);

            session.set_query(&new_query);
            prop_assert_eq!(session.results(), &SearchResults::NotSearched);
            prop_assert!(session.confirmable().is_none());
        }

        #[test]
        fn choose_accepts_exactly_the_listed_indices(
            candidates in arb_candidates(5),
            index in 0_usize..10,
        ) {
            let mut session = SearchSession::new(SelectionTarget::Pickup);
            session.set_query("somewhere");
            let listed = candidates.len().min(MAX_CANDIDATES);
            session.record_results(candidates);

            prop_assert_eq!(session.choose(index).is_ok(), index < listed);
        }

        #[test]
        fn confirmable_is_chosen_or_top_ranked(candidates in arb_candidates(5)) {
            let mut session = SearchSession::new(SelectionTarget::Pickup);
            session.set_query("somewhere");
            session.record_results(candidates.clone());

            match session.confirmable() {
                Some(candidate) => prop_assert_eq!(candidate, &candidates[0]),
                None => prop_assert!(candidates.is_empty()),
            }
        }
    }
}

mod trip_tests {
    use super::*;

    proptest! {
        #[test]
        fn setting_pickup_always_places_the_robot_there(location in arb_location()) {
            let mut trip = Trip::new();
            trip.set_pickup(location);

            prop_assert_eq!(trip.pickup(), Some(location));
            prop_assert_eq!(trip.robot(), Some(location));
        }

        #[test]
        fn setting_drop_off_never_moves_the_robot(
            pickup in arb_location(),
            drop_off in arb_location(),
        ) {
            let mut trip = Trip::new();
            trip.set_pickup(pickup);
            trip.set_drop_off(drop_off);

            prop_assert_eq!(trip.robot(), Some(pickup));
            prop_assert!(trip.route_ready());
        }

        #[test]
        fn delivery_moves_the_robot_to_the_drop_off(
            pickup in arb_location(),
            drop_off in arb_location(),
        ) {
            let mut trip = Trip::new();
            trip.set_pickup(pickup);
            trip.set_drop_off(drop_off);

            let destination = trip.complete_delivery().expect("route ready");
            prop_assert_eq!(destination, drop_off);
            prop_assert_eq!(trip.robot(), Some(drop_off));
        }

        #[test]
        fn delivery_without_both_endpoints_is_rejected(location in arb_location()) {
            let mut pickup_only = Trip::new();
            pickup_only.set_pickup(location);
            prop_assert!(pickup_only.complete_delivery().is_err());

            let mut drop_only = Trip::new();
            drop_only.set_drop_off(location);
            prop_assert!(drop_only.complete_delivery().is_err());
        }
    }
}
