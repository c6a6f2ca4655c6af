//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, menu cards, the cart drawer, and the
//! station board surfaces while reading/writing shared state from Leptos
//! context providers.

pub mod cart_drawer;
pub mod category_tabs;
pub mod floating_cart;
pub mod footer;
pub mod grid_host;
pub mod header;
pub mod product_card;
pub mod product_grid;
pub mod spinner;
pub mod station_detail;
pub mod station_stats;
