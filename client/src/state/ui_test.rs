use super::*;

#[test]
fn ui_state_default_drawer_closed() {
    let state = UiState::default();
    assert!(!state.cart_open);
}

#[test]
fn ui_state_default_tab_is_all() {
    let state = UiState::default();
    assert_eq!(state.active_category, ALL_CATEGORIES);
}
