//! Design-time floor placement of station slots.
//!
//! The layout is configuration, not runtime data: each slot pins a logical
//! station identifier to a percentage-based position on the board canvas so
//! the map survives any canvas size. A slot with no match in the live status
//! feed is simply not drawn.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// A point in canvas (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed placement for one station on the floor map.
///
/// `x_pct` / `y_pct` are percentages (0–100) of the canvas dimensions;
/// `rotation_deg` is the clockwise glyph rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub station: &'static str,
    pub x_pct: f64,
    pub y_pct: f64,
    pub rotation_deg: f64,
}

impl Slot {
    /// Pixel position of the slot center for the given canvas dimensions.
    #[must_use]
    pub fn center(&self, viewport_w: f64, viewport_h: f64) -> Point {
        Point {
            x: viewport_w * self.x_pct / 100.0,
            y: viewport_h * self.y_pct / 100.0,
        }
    }
}

/// The lounge floor: a top row facing down and a bottom row facing up.
pub const LOUNGE_LAYOUT: [Slot; 10] = [
    // Top row, left to right.
    Slot { station: "PC-005", x_pct: 15.0, y_pct: 10.0, rotation_deg: 0.0 },
    Slot { station: "PC-004", x_pct: 30.0, y_pct: 10.0, rotation_deg: 0.0 },
    Slot { station: "PC-003", x_pct: 45.0, y_pct: 10.0, rotation_deg: 0.0 },
    Slot { station: "PC-002", x_pct: 60.0, y_pct: 10.0, rotation_deg: 0.0 },
    Slot { station: "PC-001", x_pct: 75.0, y_pct: 10.0, rotation_deg: 0.0 },
    // Bottom row, right to left.
    Slot { station: "PC-010", x_pct: 80.0, y_pct: 85.0, rotation_deg: 180.0 },
    Slot { station: "PC-009", x_pct: 65.0, y_pct: 85.0, rotation_deg: 180.0 },
    Slot { station: "PC-008", x_pct: 50.0, y_pct: 85.0, rotation_deg: 180.0 },
    Slot { station: "PC-007", x_pct: 35.0, y_pct: 85.0, rotation_deg: 180.0 },
    Slot { station: "PC-006", x_pct: 20.0, y_pct: 85.0, rotation_deg: 180.0 },
];
