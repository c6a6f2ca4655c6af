use super::*;
use crate::net::types::StationState;

fn station(number: &str, status: StationState) -> StationStatus {
    StationStatus {
        pc_number: number.to_owned(),
        name: format!("Station {number}"),
        status,
        location: None,
    }
}

#[test]
fn loading_state_is_empty_with_no_error() {
    let state = StationsState::loading();
    assert!(state.loading);
    assert!(state.stations.is_empty());
    assert_eq!(state.stats, None);
    assert_eq!(state.error, None);
    assert_eq!(state.selected, None);
}

#[test]
fn apply_feed_replaces_data_and_clears_error() {
    let mut state = StationsState::loading();
    state.apply_failure("request failed: 500".to_owned());

    let stats = StationStats { total: 2, available: 1, occupied: 1, maintenance: 0 };
    state.apply_feed(
        vec![station("PC-001", StationState::Available), station("PC-002", StationState::Occupied)],
        stats,
    );
    assert!(!state.loading);
    assert_eq!(state.stations.len(), 2);
    assert_eq!(state.stats, Some(stats));
    assert_eq!(state.error, None);
}

#[test]
fn apply_failure_drops_stale_data() {
    let mut state = StationsState::loading();
    state.apply_feed(
        vec![station("PC-001", StationState::Available)],
        StationStats { total: 1, available: 1, occupied: 0, maintenance: 0 },
    );
    state.apply_failure("request timed out after 10s".to_owned());
    assert!(state.stations.is_empty());
    assert_eq!(state.stats, None);
    assert_eq!(state.error.as_deref(), Some("request timed out after 10s"));
}

#[test]
fn selection_survives_a_feed_refresh() {
    let mut state = StationsState::loading();
    state.selected = Some(station("PC-003", StationState::Maintenance));
    state.apply_feed(
        vec![station("PC-003", StationState::Available)],
        StationStats { total: 1, available: 1, occupied: 0, maintenance: 0 },
    );
    // The detail view shows the snapshot taken at click time.
    assert_eq!(state.selected.as_ref().map(|s| s.status), Some(StationState::Maintenance));
}
