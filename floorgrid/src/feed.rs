//! Live station status records and identifier resolution.
//!
//! DESIGN
//! ======
//! The status source keys stations loosely: a record may arrive as `"7"` or
//! `"PC7"` and the floor layout may use either form. [`StatusFeed::resolve`]
//! is the single normalization point — a pure, total lookup that tries exact,
//! then prefixed, then prefix-stripped forms and answers with `Option` rather
//! than erroring. The feed is read-only to this crate: station state is owned
//! by the external source and only reflected here.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// Live occupancy state of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationState {
    Available,
    Occupied,
    Maintenance,
}

impl StationState {
    /// Human-readable label used in detail views.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

/// One station's status snapshot from the live feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    /// Logical station identifier as keyed by the source (e.g. `"PC-003"`).
    pub number: String,
    /// Display name.
    pub name: String,
    pub state: StationState,
    /// Optional free-text location within the lounge.
    pub location: Option<String>,
}

/// The current set of station records, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFeed {
    records: Vec<StationRecord>,
}

/// Strip a leading `PC` prefix, case-insensitively.
///
/// Returns `None` when the identifier does not carry the prefix, so callers
/// can distinguish "bare form" from "stripped form".
#[must_use]
pub fn strip_station_prefix(identifier: &str) -> Option<&str> {
    let (head, tail) = identifier.split_at_checked(2)?;
    head.eq_ignore_ascii_case("PC").then_some(tail)
}

impl StatusFeed {
    #[must_use]
    pub fn new(records: Vec<StationRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Find the record for a layout identifier.
    ///
    /// Matching tries, in order:
    /// 1. the exact identifier;
    /// 2. the prefixed form (`"7"` matches a record keyed `"PC7"`);
    /// 3. the stripped form (`"PC7"` matches a record keyed `"7"`).
    ///
    /// The `PC` prefix comparison is case-insensitive. A miss is an expected
    /// outcome (the slot is skipped by rendering), never an error.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<&StationRecord> {
        if let Some(record) = self.records.iter().find(|r| r.number == identifier) {
            return Some(record);
        }
        if let Some(record) = self
            .records
            .iter()
            .find(|r| strip_station_prefix(&r.number) == Some(identifier))
        {
            return Some(record);
        }
        if let Some(bare) = strip_station_prefix(identifier) {
            return self.records.iter().find(|r| r.number == bare);
        }
        None
    }
}
