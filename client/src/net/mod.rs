//! Networking modules for the external lounge API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the read-only HTTP calls (menu, exchange rate, station
//! status) and `types` defines the wire schema those endpoints speak.

pub mod api;
pub mod types;
