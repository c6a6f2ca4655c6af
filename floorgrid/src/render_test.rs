use super::*;

// =============================================================
// state_colors
// =============================================================

#[test]
fn available_maps_to_teal() {
    let (fill, _, glow) = state_colors(StationState::Available);
    assert_eq!(fill, "#00CED1");
    assert_eq!(glow, "rgba(0,206,209,0.8)");
}

#[test]
fn occupied_maps_to_pink() {
    let (fill, _, glow) = state_colors(StationState::Occupied);
    assert_eq!(fill, "#FF4081");
    assert_eq!(glow, "rgba(255,64,129,0.8)");
}

#[test]
fn maintenance_maps_to_orange() {
    let (fill, _, glow) = state_colors(StationState::Maintenance);
    assert_eq!(fill, "#FFA726");
    assert_eq!(glow, "rgba(255,167,38,0.8)");
}

#[test]
fn faded_fill_differs_from_fill() {
    for state in [StationState::Available, StationState::Occupied, StationState::Maintenance] {
        let (fill, fade, _) = state_colors(state);
        assert_ne!(fill, fade);
        assert!(fade.starts_with("rgba("));
    }
}

// =============================================================
// pulse_alpha
// =============================================================

#[test]
fn pulse_alpha_stays_within_visible_band() {
    for step in 0..200 {
        let alpha = pulse_alpha(f64::from(step) * 50.0);
        assert!((0.4..=1.0).contains(&alpha), "alpha {alpha} out of band at step {step}");
    }
}

#[test]
fn pulse_alpha_at_phase_zero_is_midpoint() {
    let alpha = pulse_alpha(0.0);
    assert!((alpha - 0.7).abs() < 1e-12);
}

#[test]
fn pulse_alpha_peaks_a_quarter_cycle_in() {
    use std::f64::consts::FRAC_PI_2;
    let alpha = pulse_alpha(FRAC_PI_2 * 500.0);
    assert!((alpha - 1.0).abs() < 1e-9);
}

#[test]
fn pulse_alpha_oscillates_over_time() {
    let early = pulse_alpha(0.0);
    let later = pulse_alpha(700.0);
    assert!((early - later).abs() > 1e-3, "pulse should move with the clock");
}
