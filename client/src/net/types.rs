//! Wire DTOs for the external lounge API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase keys) so serde
//! can consume responses as-is; no validation happens beyond optional-field
//! handling. The `floorgrid` crate has its own station types; the grid host
//! component converts between the two.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu product from the external catalog. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier — cart line items key on this.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub category: Category,
    pub pricing: Pricing,
    /// Image URL; menu cards fall back to a compact layout without one.
    pub image: Option<String>,
}

/// Product category metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Dual-currency unit price.
///
/// USD is carried as a decimal so quantity math cannot drift; LBP amounts
/// are integral by nature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub usd: Decimal,
    pub lbp: i64,
}

/// Current USD→LBP exchange rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate: f64,
    pub last_updated: String,
}

/// Live occupancy state of a gaming station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationState {
    Available,
    Occupied,
    Maintenance,
}

/// One station's status snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationStatus {
    /// Logical station identifier (`"PC-003"`, `"PC7"`, or bare `"7"`).
    pub pc_number: String,
    pub name: String,
    pub status: StationState,
    pub location: Option<String>,
}

/// Aggregate station counts reported alongside the status list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStats {
    pub total: u32,
    pub available: u32,
    pub occupied: u32,
    pub maintenance: u32,
}

/// Response shape of the station status endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationStatusResponse {
    pub pcs: Vec<StationStatus>,
    pub stats: StationStats,
}
