use super::*;

// =============================================================
// Slot::center
// =============================================================

#[test]
fn center_maps_percentages_to_pixels() {
    let slot = Slot { station: "PC-001", x_pct: 75.0, y_pct: 10.0, rotation_deg: 0.0 };
    let center = slot.center(1000.0, 600.0);
    assert_eq!(center, Point::new(750.0, 60.0));
}

#[test]
fn center_scales_with_canvas_size() {
    let slot = Slot { station: "PC-008", x_pct: 50.0, y_pct: 85.0, rotation_deg: 180.0 };
    assert_eq!(slot.center(400.0, 400.0), Point::new(200.0, 340.0));
    assert_eq!(slot.center(800.0, 400.0), Point::new(400.0, 340.0));
}

#[test]
fn center_of_zero_canvas_is_origin() {
    let slot = Slot { station: "PC-001", x_pct: 75.0, y_pct: 10.0, rotation_deg: 0.0 };
    assert_eq!(slot.center(0.0, 0.0), Point::new(0.0, 0.0));
}

// =============================================================
// LOUNGE_LAYOUT
// =============================================================

#[test]
fn layout_has_ten_unique_stations() {
    let mut stations: Vec<&str> = LOUNGE_LAYOUT.iter().map(|s| s.station).collect();
    stations.sort_unstable();
    stations.dedup();
    assert_eq!(stations.len(), 10);
}

#[test]
fn layout_coordinates_stay_inside_the_canvas() {
    for slot in &LOUNGE_LAYOUT {
        assert!((0.0..=100.0).contains(&slot.x_pct), "{} x out of range", slot.station);
        assert!((0.0..=100.0).contains(&slot.y_pct), "{} y out of range", slot.station);
    }
}

#[test]
fn bottom_row_faces_the_room() {
    for slot in LOUNGE_LAYOUT.iter().filter(|s| s.y_pct > 50.0) {
        assert_eq!(slot.rotation_deg, 180.0, "{} should face up", slot.station);
    }
}
