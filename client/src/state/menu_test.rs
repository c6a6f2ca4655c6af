use super::*;
use crate::net::types::Pricing;

fn product(id: &str, category_id: &str, category_name: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: id.to_owned(),
        description: None,
        sku: format!("SKU-{id}"),
        category: Category {
            id: category_id.to_owned(),
            name: category_name.to_owned(),
            description: None,
        },
        pricing: Pricing { usd: "1.00".parse().expect("decimal"), lbp: 89_500 },
        image: None,
    }
}

// =============================================================
// group_by_category
// =============================================================

#[test]
fn grouping_preserves_first_seen_category_order() {
    let groups = group_by_category(vec![
        product("cola", "drinks", "Drinks"),
        product("chips", "snacks", "Snacks"),
        product("water", "drinks", "Drinks"),
    ]);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category.id, "drinks");
    assert_eq!(groups[0].products.len(), 2);
    assert_eq!(groups[1].category.id, "snacks");
    assert_eq!(groups[1].products.len(), 1);
}

#[test]
fn grouping_preserves_catalog_order_within_a_group() {
    let groups = group_by_category(vec![
        product("cola", "drinks", "Drinks"),
        product("water", "drinks", "Drinks"),
        product("juice", "drinks", "Drinks"),
    ]);
    let names: Vec<&str> = groups[0].products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(names, ["cola", "water", "juice"]);
}

#[test]
fn grouping_empty_catalog_yields_no_groups() {
    assert!(group_by_category(Vec::new()).is_empty());
}

// =============================================================
// MenuState
// =============================================================

#[test]
fn loading_state_has_no_error_and_no_groups() {
    let state = MenuState::loading();
    assert!(state.loading);
    assert!(state.groups.is_empty());
    assert_eq!(state.error, None);
}

#[test]
fn loaded_state_groups_the_catalog() {
    let state = MenuState::loaded(vec![
        product("cola", "drinks", "Drinks"),
        product("chips", "snacks", "Snacks"),
    ]);
    assert!(!state.loading);
    assert_eq!(state.groups.len(), 2);
    assert_eq!(state.total_products(), 2);
}

#[test]
fn failed_state_keeps_only_the_message() {
    let state = MenuState::failed("request failed: 500".to_owned());
    assert!(!state.loading);
    assert!(state.groups.is_empty());
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
}

#[test]
fn products_for_all_returns_every_product() {
    let state = MenuState::loaded(vec![
        product("cola", "drinks", "Drinks"),
        product("chips", "snacks", "Snacks"),
        product("water", "drinks", "Drinks"),
    ]);
    assert_eq!(state.products_for(ALL_CATEGORIES).len(), 3);
}

#[test]
fn products_for_category_filters_to_that_group() {
    let state = MenuState::loaded(vec![
        product("cola", "drinks", "Drinks"),
        product("chips", "snacks", "Snacks"),
    ]);
    let drinks = state.products_for("drinks");
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].id, "cola");
}

#[test]
fn products_for_unknown_category_is_empty() {
    let state = MenuState::loaded(vec![product("cola", "drinks", "Drinks")]);
    assert!(state.products_for("desserts").is_empty());
}

// =============================================================
// ExchangeState
// =============================================================

#[test]
fn exchange_state_defaults_to_fallback_rate() {
    let state = ExchangeState::default();
    assert_eq!(state.rate, FALLBACK_EXCHANGE_RATE);
    assert!(state.loading);
}
