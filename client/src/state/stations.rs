//! Station status board state.
//!
//! Status is authoritative from the external source: this model only
//! reflects the latest poll plus which station's detail view is open.

#[cfg(test)]
#[path = "stations_test.rs"]
mod stations_test;

use crate::net::types::{StationStats, StationStatus};

/// Stations page state fed by the 30-second poll.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StationsState {
    pub stations: Vec<StationStatus>,
    pub stats: Option<StationStats>,
    pub loading: bool,
    pub error: Option<String>,
    /// Status snapshot of the clicked station, while the detail view is open.
    pub selected: Option<StationStatus>,
}

impl StationsState {
    /// Initial state while the first fetch is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Apply a successful poll: replace the feed and clear any prior error.
    pub fn apply_feed(&mut self, stations: Vec<StationStatus>, stats: StationStats) {
        self.stations = stations;
        self.stats = Some(stats);
        self.loading = false;
        self.error = None;
    }

    /// Apply a failed poll: keep the message, drop stale data.
    pub fn apply_failure(&mut self, message: String) {
        self.stations = Vec::new();
        self.stats = None;
        self.loading = false;
        self.error = Some(message);
    }
}
