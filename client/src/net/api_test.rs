use super::*;

#[test]
fn endpoints_share_the_api_base() {
    let base = api_base();
    assert!(menu_products_endpoint().starts_with(base));
    assert!(exchange_rate_endpoint().starts_with(base));
    assert!(station_status_endpoint().starts_with(base));
}

#[test]
fn menu_products_endpoint_path() {
    assert!(menu_products_endpoint().ends_with("/products/menu"));
}

#[test]
fn exchange_rate_endpoint_path() {
    assert!(exchange_rate_endpoint().ends_with("/exchange-rate/current"));
}

#[test]
fn station_status_endpoint_path() {
    assert!(station_status_endpoint().ends_with("/gaming/pcs/status"));
}

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}

#[test]
fn timed_out_message_names_the_bound() {
    assert_eq!(timed_out_message(), "request timed out after 10s");
}
