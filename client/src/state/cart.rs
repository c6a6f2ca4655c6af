//! The customer's in-progress order.
//!
//! DESIGN
//! ======
//! A single editable collection of line items keyed by product id. Totals are
//! never stored — [`CartState::total_price`] recomputes from the line items
//! on every call so displayed amounts cannot drift from their source.
//! Checkout is not a tracked lifecycle: the cart drawer opens the handoff
//! link and then resets this state unconditionally.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use rust_decimal::Decimal;

use crate::net::types::Product;

/// One product/quantity pair in the cart. Identity is the product id.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1; dropping to 0 removes the item instead.
    pub quantity: u32,
}

/// Dual-currency totals derived from the current line items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub usd: Decimal,
    pub lbp: i64,
}

/// The cart plus the checkout form fields that reset with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
    pub customer_name: String,
    pub customer_notes: String,
}

impl CartState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product: increments the existing line item or
    /// inserts a new one with quantity 1. No upper bound is enforced.
    pub fn add_item(&mut self, product: Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem { product, quantity: 1 }),
        }
    }

    /// Set a line item's quantity. Non-positive values remove the item;
    /// an unknown product id is a silent no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product_id) {
            item.quantity = quantity as u32;
        }
    }

    /// Delete a line item regardless of quantity. No-op when absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all items — the badge count.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Σ(unit price × quantity) per currency, recomputed from line items.
    #[must_use]
    pub fn total_price(&self) -> CartTotals {
        self.items.iter().fold(CartTotals::default(), |mut totals, item| {
            let quantity = Decimal::from(item.quantity);
            totals.usd += item.product.pricing.usd * quantity;
            totals.lbp += item.product.pricing.lbp * i64::from(item.quantity);
            totals
        })
    }

    /// Reset everything after checkout: items, name, and notes.
    pub fn reset_after_checkout(&mut self) {
        self.clear();
        self.customer_name.clear();
        self.customer_notes.clear();
    }
}
