//! Checkout payload construction.
//!
//! DESIGN
//! ======
//! Checkout is a fire-and-forget handoff to an external chat channel: the
//! order is rendered into a preformatted text block, percent-encoded into a
//! deep link, and opened in a new browsing context. Both steps are pure
//! functions here so the payload contract is unit-testable; only the cart
//! drawer performs the side effect (and the unconditional cart reset that
//! follows — delivery is never confirmed).

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal::Decimal;

use crate::state::cart::{CartItem, CartTotals};
use crate::util::money::{format_dual, format_lbp, format_usd};

/// Fixed destination chat number for order handoff.
pub const ORDER_DESTINATION: &str = "96181453643";

/// Fixed closing location line.
const ORDER_FOOTER: &str = "📍 Epic Lounge - Sidon, Lebanon";

/// Render the cart into the order message text block.
///
/// Layout: header, optional customer line, a numbered block per line item
/// (quantity, unit price, subtotal — each dual-currency), a totals section,
/// optional notes, and the fixed location footer. Name and notes lines are
/// omitted entirely when blank.
#[must_use]
pub fn build_order_message(
    items: &[CartItem],
    totals: CartTotals,
    customer_name: &str,
    customer_notes: &str,
) -> String {
    let mut message = String::from("🎮 *EPIC LOUNGE ORDER*\n\n");

    let name = customer_name.trim();
    if !name.is_empty() {
        message.push_str(&format!("👤 *Customer:* {name}\n\n"));
    }

    message.push_str("📋 *Order Details:*\n");
    message.push_str("━━━━━━━━━━━━━━━━\n\n");

    for (index, item) in items.iter().enumerate() {
        let unit = &item.product.pricing;
        let quantity = Decimal::from(item.quantity);
        message.push_str(&format!("{}. *{}*\n", index + 1, item.product.name));
        message.push_str(&format!("   • Quantity: {}\n", item.quantity));
        message.push_str(&format!("   • Price: {}\n", format_dual(unit.usd, unit.lbp)));
        message.push_str(&format!(
            "   • Subtotal: {}\n\n",
            format_dual(unit.usd * quantity, unit.lbp * i64::from(item.quantity))
        ));
    }

    message.push_str("━━━━━━━━━━━━━━━━\n");
    message.push_str("💰 *TOTAL:*\n");
    message.push_str(&format!("   • USD: {}\n", format_usd(totals.usd)));
    message.push_str(&format!("   • LBP: {}\n\n", format_lbp(totals.lbp)));

    let notes = customer_notes.trim();
    if !notes.is_empty() {
        message.push_str(&format!("📝 *Notes:* {notes}\n\n"));
    }

    message.push_str(ORDER_FOOTER);
    message
}

/// Deep link that opens the chat channel with the message prefilled.
#[must_use]
pub fn checkout_url(message: &str) -> String {
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("https://wa.me/{ORDER_DESTINATION}?text={encoded}")
}
