//! Dual-currency display formatting.
//!
//! The formats here are a contract shared by the menu cards, the cart
//! drawer, and the checkout message: USD always shows exactly two decimals,
//! LBP always shows a thousands-grouped integer.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a USD amount as `$12.50`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Format an LBP amount with comma thousands separators, e.g. `492,250`.
#[must_use]
pub fn format_lbp(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative { format!("-{grouped}") } else { grouped }
}

/// Both currencies side by side, e.g. `$2.00 / 179,000 LBP`.
#[must_use]
pub fn format_dual(usd: Decimal, lbp: i64) -> String {
    format!("{} / {} LBP", format_usd(usd), format_lbp(lbp))
}
