//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (drawer visibility, active tab) out
//! of domain state so the cart and catalog models stay protocol-shaped.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::menu::ALL_CATEGORIES;

/// UI state for the cart drawer and menu category tabs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub cart_open: bool,
    pub active_category: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { cart_open: false, active_category: ALL_CATEGORIES.to_owned() }
    }
}
