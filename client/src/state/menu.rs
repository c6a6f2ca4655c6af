//! Menu catalog state: fetch status plus category grouping.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::net::types::{Category, Product};

/// One category tab's worth of products.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Menu page state. Starts loading; exactly one of the error message or the
/// grouped catalog is meaningful once the fetch settles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    pub groups: Vec<CategoryGroup>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MenuState {
    /// Initial state while the catalog fetch is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { groups: Vec::new(), loading: true, error: None }
    }

    /// Catalog fetched: group and clear any prior error.
    #[must_use]
    pub fn loaded(products: Vec<Product>) -> Self {
        Self { groups: group_by_category(products), loading: false, error: None }
    }

    /// Fetch failed: keep the message, drop any stale catalog.
    #[must_use]
    pub fn failed(message: String) -> Self {
        Self { groups: Vec::new(), loading: false, error: Some(message) }
    }

    /// Total product count across all categories (the "All" tab badge).
    #[must_use]
    pub fn total_products(&self) -> usize {
        self.groups.iter().map(|g| g.products.len()).sum()
    }

    /// Products for one category id, or every product for [`ALL_CATEGORIES`].
    #[must_use]
    pub fn products_for(&self, category_id: &str) -> Vec<Product> {
        if category_id == ALL_CATEGORIES {
            return self.groups.iter().flat_map(|g| g.products.iter().cloned()).collect();
        }
        self.groups
            .iter()
            .find(|g| g.category.id == category_id)
            .map(|g| g.products.clone())
            .unwrap_or_default()
    }
}

/// Sentinel tab id for the ungrouped "All" view.
pub const ALL_CATEGORIES: &str = "all";

/// Group products by category id, preserving first-seen category order and
/// catalog order within each group.
#[must_use]
pub fn group_by_category(products: Vec<Product>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for product in products {
        match groups.iter_mut().find(|g| g.category.id == product.category.id) {
            Some(group) => group.products.push(product),
            None => groups.push(CategoryGroup {
                category: product.category.clone(),
                products: vec![product],
            }),
        }
    }
    groups
}

/// Exchange rate display state. The fallback rate is shown until the live
/// value arrives; a failed fetch just keeps the fallback (no error surface).
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeState {
    pub rate: f64,
    pub loading: bool,
}

/// Fallback USD→LBP rate used before the live rate loads.
pub const FALLBACK_EXCHANGE_RATE: f64 = 89_500.0;

impl Default for ExchangeState {
    fn default() -> Self {
        Self { rate: FALLBACK_EXCHANGE_RATE, loading: true }
    }
}
