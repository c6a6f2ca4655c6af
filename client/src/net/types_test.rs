use super::*;

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

#[test]
fn product_deserializes_from_catalog_json() {
    let json = r#"{
        "id": "p-42",
        "name": "Iced Coffee",
        "description": "Cold brew over ice",
        "sku": "DRK-042",
        "category": { "id": "drinks", "name": "Drinks", "description": null },
        "pricing": { "usd": 2.0, "lbp": 179000 },
        "image": "https://cdn.example/iced.jpg"
    }"#;
    let product: Product = serde_json::from_str(json).expect("valid product");
    assert_eq!(product.id, "p-42");
    assert_eq!(product.category.name, "Drinks");
    assert_eq!(product.pricing.usd, dec("2.0"));
    assert_eq!(product.pricing.lbp, 179_000);
    assert_eq!(product.image.as_deref(), Some("https://cdn.example/iced.jpg"));
}

#[test]
fn product_optional_fields_may_be_absent() {
    let json = r#"{
        "id": "p-7",
        "name": "Chips",
        "sku": "SNK-007",
        "category": { "id": "snacks", "name": "Snacks" },
        "pricing": { "usd": 1.5, "lbp": 134250 }
    }"#;
    let product: Product = serde_json::from_str(json).expect("valid product");
    assert_eq!(product.description, None);
    assert_eq!(product.image, None);
    assert_eq!(product.category.description, None);
}

#[test]
fn exchange_rate_uses_camel_case_keys() {
    let json = r#"{ "rate": 89500, "lastUpdated": "2025-01-04T10:00:00Z" }"#;
    let rate: ExchangeRate = serde_json::from_str(json).expect("valid rate");
    assert_eq!(rate.rate, 89_500.0);
    assert_eq!(rate.last_updated, "2025-01-04T10:00:00Z");
}

#[test]
fn station_status_uses_camel_case_and_lowercase_states() {
    let json = r#"{
        "pcs": [
            { "pcNumber": "PC-001", "name": "Station 1", "status": "available", "location": "Front row" },
            { "pcNumber": "PC-002", "name": "Station 2", "status": "occupied", "location": null },
            { "pcNumber": "7", "name": "Station 7", "status": "maintenance" }
        ],
        "stats": { "total": 3, "available": 1, "occupied": 1, "maintenance": 1 }
    }"#;
    let response: StationStatusResponse = serde_json::from_str(json).expect("valid status");
    assert_eq!(response.pcs.len(), 3);
    assert_eq!(response.pcs[0].status, StationState::Available);
    assert_eq!(response.pcs[1].status, StationState::Occupied);
    assert_eq!(response.pcs[2].status, StationState::Maintenance);
    assert_eq!(response.pcs[2].pc_number, "7");
    assert_eq!(response.pcs[2].location, None);
    assert_eq!(response.stats.total, 3);
}

#[test]
fn unknown_station_state_is_a_deserialization_error() {
    let json = r#"{ "pcNumber": "PC-001", "name": "Station 1", "status": "rebooting" }"#;
    assert!(serde_json::from_str::<StationStatus>(json).is_err());
}

#[test]
fn pricing_usd_multiplies_without_drift() {
    let pricing: Pricing = serde_json::from_str(r#"{ "usd": 1.5, "lbp": 134250 }"#).expect("valid pricing");
    // Three servings at $1.50 must be exactly $4.50, not 4.499999….
    let total = pricing.usd * Decimal::from(3);
    assert_eq!(total, dec("4.5"));
    assert_eq!(format!("{total:.2}"), "4.50");
}
