use super::*;

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

// =============================================================
// format_usd
// =============================================================

#[test]
fn usd_always_shows_two_decimals() {
    assert_eq!(format_usd(dec("2")), "$2.00");
    assert_eq!(format_usd(dec("2.5")), "$2.50");
    assert_eq!(format_usd(dec("5.50")), "$5.50");
    assert_eq!(format_usd(dec("0")), "$0.00");
}

#[test]
fn usd_rounds_excess_precision() {
    assert_eq!(format_usd(dec("1.005")), "$1.01");
    assert_eq!(format_usd(dec("1.004")), "$1.00");
}

// =============================================================
// format_lbp
// =============================================================

#[test]
fn lbp_groups_thousands() {
    assert_eq!(format_lbp(0), "0");
    assert_eq!(format_lbp(950), "950");
    assert_eq!(format_lbp(1_000), "1,000");
    assert_eq!(format_lbp(89_500), "89,500");
    assert_eq!(format_lbp(179_000), "179,000");
    assert_eq!(format_lbp(492_250), "492,250");
    assert_eq!(format_lbp(1_234_567_890), "1,234,567,890");
}

#[test]
fn lbp_handles_negative_amounts() {
    assert_eq!(format_lbp(-1_500), "-1,500");
}

// =============================================================
// format_dual
// =============================================================

#[test]
fn dual_joins_both_currencies() {
    assert_eq!(format_dual(dec("2.00"), 179_000), "$2.00 / 179,000 LBP");
}
