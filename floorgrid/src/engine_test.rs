use super::*;
use crate::feed::StationState;

fn record(number: &str, state: StationState) -> StationRecord {
    StationRecord {
        number: number.to_owned(),
        name: format!("Station {number}"),
        state,
        location: Some("Main floor".to_owned()),
    }
}

/// A core sized so every layout slot is comfortably clickable.
fn core_with(numbers: &[&str]) -> GridCore {
    let mut core = GridCore::new();
    core.set_viewport(1000.0, 1000.0, 1.0);
    core.set_feed(StatusFeed::new(
        numbers.iter().map(|n| record(n, StationState::Available)).collect(),
    ));
    core
}

fn center_of(core: &GridCore, station: &str) -> Point {
    let slot = core
        .slots()
        .iter()
        .find(|s| s.station == station)
        .copied()
        .unwrap_or(crate::layout::LOUNGE_LAYOUT[0]);
    slot.center(core.viewport_width, core.viewport_height)
}

// =============================================================
// glyph_size_for_width
// =============================================================

#[test]
fn glyph_size_steps_down_with_viewport_width() {
    assert_eq!(glyph_size_for_width(1200.0), 60.0);
    assert_eq!(glyph_size_for_width(900.0), 60.0);
    assert_eq!(glyph_size_for_width(899.0), 40.0);
    assert_eq!(glyph_size_for_width(600.0), 40.0);
    assert_eq!(glyph_size_for_width(599.0), 30.0);
    assert_eq!(glyph_size_for_width(0.0), 30.0);
}

// =============================================================
// Hover tracking
// =============================================================

#[test]
fn pointer_over_station_sets_hover_and_pointer_cursor() {
    let mut core = core_with(&["PC-001"]);
    let actions = core.on_pointer_move(center_of(&core, "PC-001"));
    assert_eq!(actions, vec![Action::SetCursor("pointer")]);
    assert_eq!(core.hovered.as_deref(), Some("PC-001"));
}

#[test]
fn pointer_over_empty_floor_reports_nothing_when_not_hovering() {
    let mut core = core_with(&["PC-001"]);
    let actions = core.on_pointer_move(Point::new(500.0, 500.0));
    assert!(actions.is_empty());
    assert_eq!(core.hovered, None);
}

#[test]
fn pointer_leaving_station_restores_default_cursor() {
    let mut core = core_with(&["PC-001"]);
    core.on_pointer_move(center_of(&core, "PC-001"));
    let actions = core.on_pointer_move(Point::new(500.0, 500.0));
    assert_eq!(actions, vec![Action::SetCursor("default")]);
    assert_eq!(core.hovered, None);
}

#[test]
fn repeated_moves_over_same_station_report_once() {
    let mut core = core_with(&["PC-001"]);
    let center = center_of(&core, "PC-001");
    assert_eq!(core.on_pointer_move(center).len(), 1);
    assert!(core.on_pointer_move(Point::new(center.x + 1.0, center.y)).is_empty());
}

#[test]
fn pointer_leave_clears_hover() {
    let mut core = core_with(&["PC-001"]);
    core.on_pointer_move(center_of(&core, "PC-001"));
    let actions = core.on_pointer_leave();
    assert_eq!(actions, vec![Action::SetCursor("default")]);
    assert_eq!(core.hovered, None);
    assert!(core.on_pointer_leave().is_empty());
}

#[test]
fn hover_over_unresolved_slot_is_ignored() {
    // Layout knows PC-002 but the feed does not carry it.
    let mut core = core_with(&["PC-001"]);
    let actions = core.on_pointer_move(center_of(&core, "PC-002"));
    assert!(actions.is_empty());
    assert_eq!(core.hovered, None);
}

#[test]
fn feed_refresh_drops_hover_on_vanished_station() {
    let mut core = core_with(&["PC-001"]);
    core.on_pointer_move(center_of(&core, "PC-001"));
    assert!(core.hovered.is_some());

    core.set_feed(StatusFeed::new(vec![record("PC-002", StationState::Occupied)]));
    assert_eq!(core.hovered, None);
}

#[test]
fn feed_refresh_keeps_hover_on_surviving_station() {
    let mut core = core_with(&["PC-001"]);
    core.on_pointer_move(center_of(&core, "PC-001"));

    core.set_feed(StatusFeed::new(vec![record("PC-001", StationState::Occupied)]));
    assert_eq!(core.hovered.as_deref(), Some("PC-001"));
}

// =============================================================
// Click
// =============================================================

#[test]
fn click_on_station_reports_status_snapshot() {
    let mut core = core_with(&[]);
    core.set_feed(StatusFeed::new(vec![record("PC-003", StationState::Maintenance)]));
    let actions = core.on_click(center_of(&core, "PC-003"));
    match actions.as_slice() {
        [Action::StationChosen(chosen)] => {
            assert_eq!(chosen.number, "PC-003");
            assert_eq!(chosen.state, StationState::Maintenance);
            assert_eq!(chosen.location.as_deref(), Some("Main floor"));
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn click_on_empty_floor_reports_nothing() {
    let core = core_with(&["PC-001"]);
    assert!(core.on_click(Point::new(500.0, 500.0)).is_empty());
}

#[test]
fn click_does_not_change_hover() {
    let mut core = core_with(&["PC-001"]);
    core.on_pointer_move(center_of(&core, "PC-001"));
    core.on_click(Point::new(500.0, 500.0));
    assert_eq!(core.hovered.as_deref(), Some("PC-001"));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_core_is_empty_and_unhovered() {
    let core = GridCore::new();
    assert!(core.feed.is_empty());
    assert_eq!(core.hovered, None);
    assert_eq!(core.dpr, 1.0);
    assert_eq!(core.slots().len(), 10);
}
