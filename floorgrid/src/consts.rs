//! Shared numeric and color constants for the floor grid.

// ── Glyph sizing ────────────────────────────────────────────────

/// Monitor glyph size in CSS pixels on wide viewports.
pub const GLYPH_SIZE_WIDE: f64 = 60.0;

/// Monitor glyph size on mid-width viewports.
pub const GLYPH_SIZE_MEDIUM: f64 = 40.0;

/// Monitor glyph size on narrow viewports.
pub const GLYPH_SIZE_NARROW: f64 = 30.0;

/// Viewport width below which the narrow glyph size applies.
pub const NARROW_BREAKPOINT_PX: f64 = 600.0;

/// Viewport width below which the medium glyph size applies.
pub const MEDIUM_BREAKPOINT_PX: f64 = 900.0;

/// Scale factor applied to a hovered glyph.
pub const HOVER_SCALE: f64 = 1.1;

// ── Status colors ───────────────────────────────────────────────

/// Screen fill for an available station.
pub const COLOR_AVAILABLE: &str = "#00CED1";
/// Screen fill for an occupied station.
pub const COLOR_OCCUPIED: &str = "#FF4081";
/// Screen fill for a station under maintenance.
pub const COLOR_MAINTENANCE: &str = "#FFA726";

/// Glow shadow for an available station.
pub const GLOW_AVAILABLE: &str = "rgba(0,206,209,0.8)";
/// Glow shadow for an occupied station.
pub const GLOW_OCCUPIED: &str = "rgba(255,64,129,0.8)";
/// Glow shadow for a station under maintenance.
pub const GLOW_MAINTENANCE: &str = "rgba(255,167,38,0.8)";

// ── Pulse animation ─────────────────────────────────────────────

/// Time divisor for the occupied pulse phase, in milliseconds.
pub const PULSE_PERIOD_MS: f64 = 500.0;

/// Pulse ring radius as a fraction of the glyph size.
pub const PULSE_RADIUS_RATIO: f64 = 0.8;
