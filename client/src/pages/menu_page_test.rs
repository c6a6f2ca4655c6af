use super::*;

#[test]
fn rate_line_groups_thousands() {
    assert_eq!(rate_line(89_500.0), "1 USD = 89,500 LBP");
}

#[test]
fn rate_line_rounds_fractional_rates() {
    assert_eq!(rate_line(89_500.4), "1 USD = 89,500 LBP");
    assert_eq!(rate_line(89_500.6), "1 USD = 89,501 LBP");
}

#[test]
fn menu_fetch_failed_message_matches_content_region_copy() {
    assert_eq!(MENU_FETCH_FAILED, "Failed to load menu items");
}
