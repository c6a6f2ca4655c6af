//! HTTP helpers for the external lounge API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a fixed timeout. Server-side (SSR): stubs returning errors, since the menu
//! and station data are only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one failure kind exists at this layer: "fetch failed", carried as
//! a `Result<_, String>` the way pages expect it. Timeouts, transport errors,
//! non-2xx statuses, and undecodable bodies all collapse into it; callers
//! convert the string into a user-visible message and never rethrow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ExchangeRate, Product, StationStatusResponse};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Fixed request timeout.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// API base for local development backends.
const API_BASE_DEV: &str = "http://localhost:3000/api/v1";

/// API base when deployed behind the site host.
const API_BASE_DEPLOYED: &str = "/api/v1";

/// The active API base. Compile-time selection is the only configuration
/// knob: debug builds talk to the local backend, release builds to the
/// deployed path.
#[must_use]
pub fn api_base() -> &'static str {
    if cfg!(debug_assertions) { API_BASE_DEV } else { API_BASE_DEPLOYED }
}

#[cfg(any(test, feature = "hydrate"))]
fn menu_products_endpoint() -> String {
    format!("{}/products/menu", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn exchange_rate_endpoint() -> String {
    format!("{}/exchange-rate/current", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn station_status_endpoint() -> String {
    format!("{}/gaming/pcs/status", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn timed_out_message() -> String {
    format!("request timed out after {REQUEST_TIMEOUT_SECS}s")
}

/// Envelope the catalog endpoints wrap their payloads in.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// GET a JSON payload with the fixed request timeout.
///
/// # Errors
///
/// Returns an error string on timeout, transport failure, non-2xx status, or
/// an undecodable body.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    use futures::future::{Either, select};
    use std::pin::pin;

    let request = pin!(gloo_net::http::Request::get(url).send());
    let timeout = pin!(gloo_timers::future::sleep(std::time::Duration::from_secs(
        REQUEST_TIMEOUT_SECS
    )));

    let resp = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| e.to_string())?,
        Either::Right(((), _)) => return Err(timed_out_message()),
    };
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the public menu catalog from `GET /products/menu`.
///
/// # Errors
///
/// Returns an error string if the fetch fails; never retries.
pub async fn fetch_menu_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: DataEnvelope<Vec<Product>> = get_json(&menu_products_endpoint()).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the current exchange rate from `GET /exchange-rate/current`.
///
/// # Errors
///
/// Returns an error string if the fetch fails; never retries.
pub async fn fetch_exchange_rate() -> Result<ExchangeRate, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: DataEnvelope<ExchangeRate> = get_json(&exchange_rate_endpoint()).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch live station status from `GET /gaming/pcs/status`.
///
/// # Errors
///
/// Returns an error string if the fetch fails; never retries — the stations
/// page offers a manual refresh instead.
pub async fn fetch_station_status() -> Result<StationStatusResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&station_status_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
