//! Rendering: draws the station floor map to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the grid state plus a timestamp and
//! produces pixels — it never mutates application state. Layout slots whose
//! identifier does not resolve in the status feed are skipped, not drawn as
//! an error state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Grid::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    COLOR_AVAILABLE, COLOR_MAINTENANCE, COLOR_OCCUPIED, GLOW_AVAILABLE, GLOW_MAINTENANCE,
    GLOW_OCCUPIED, GLYPH_SIZE_WIDE, HOVER_SCALE, PULSE_PERIOD_MS, PULSE_RADIUS_RATIO,
};
use crate::engine::GridCore;
use crate::feed::StationState;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Room border inset as a fraction of each canvas dimension.
const BORDER_INSET_RATIO: f64 = 0.05;

/// Room border corner radius in CSS pixels.
const BORDER_RADIUS_PX: f64 = 20.0;

/// Room border stroke color.
const BORDER_COLOR: &str = "rgba(0,206,209,0.3)";

/// Station label text color (matches the page background).
const LABEL_COLOR: &str = "#0A1929";

/// Screen fill colors for the darkened variants of the glyph body.
const BASE_SHADOW_FILL: &str = "rgba(26,26,26,0.9)";
const STAND_FILL: &str = "rgba(42,42,42,0.9)";
const BACK_PANEL_FILL: &str = "rgba(26,26,26,0.8)";
const BEZEL_FILL: &str = "rgba(10,10,10,0.95)";
const SHINE_START: &str = "rgba(255,255,255,0.3)";
const SHINE_END: &str = "rgba(255,255,255,0)";

/// Fill, faded fill, and glow colors for a station state.
#[must_use]
pub fn state_colors(state: StationState) -> (&'static str, &'static str, &'static str) {
    match state {
        StationState::Available => (COLOR_AVAILABLE, "rgba(0,206,209,0.7)", GLOW_AVAILABLE),
        StationState::Occupied => (COLOR_OCCUPIED, "rgba(255,64,129,0.7)", GLOW_OCCUPIED),
        StationState::Maintenance => (COLOR_MAINTENANCE, "rgba(255,167,38,0.7)", GLOW_MAINTENANCE),
    }
}

/// Opacity of the occupied pulse ring at the given timestamp.
///
/// Oscillates sinusoidally between 0.4 and 1.0 with a full cycle every
/// `2π × PULSE_PERIOD_MS` milliseconds.
#[must_use]
pub fn pulse_alpha(now_ms: f64) -> f64 {
    (now_ms / PULSE_PERIOD_MS).sin() * 0.3 + 0.7
}

/// Draw the full scene: room border, station glyphs, labels, pulse rings.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &GridCore, now_ms: f64) -> Result<(), JsValue> {
    let w = core.viewport_width;
    let h = core.viewport_height;
    let size = core.glyph_size();
    let line_width = if size < GLYPH_SIZE_WIDE { 2.0 } else { 3.0 };

    // Layer 1: clear and scale for the device pixel ratio.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);

    // Layer 2: the room outline.
    ctx.set_stroke_style_str(BORDER_COLOR);
    ctx.set_line_width(line_width);
    ctx.begin_path();
    trace_rounded_rect(
        ctx,
        w * BORDER_INSET_RATIO,
        h * BORDER_INSET_RATIO,
        w * (1.0 - 2.0 * BORDER_INSET_RATIO),
        h * (1.0 - 2.0 * BORDER_INSET_RATIO),
        BORDER_RADIUS_PX,
    );
    ctx.stroke();

    // Layer 3: stations with a resolved status record.
    for slot in core.slots() {
        let Some(record) = core.feed.resolve(slot.station) else {
            continue;
        };

        let center = slot.center(w, h);
        let (fill, fade, glow) = state_colors(record.state);
        let is_hovered = core.hovered.as_deref() == Some(record.number.as_str());

        draw_monitor(ctx, center.x, center.y, size, fill, fade, glow, is_hovered, slot.rotation_deg)?;
        draw_label(ctx, center.x, center.y, size, slot.rotation_deg, &record.number)?;

        if record.state == StationState::Occupied {
            draw_pulse_ring(ctx, center.x, center.y, size, fill, line_width, now_ms)?;
        }
    }

    Ok(())
}

// =============================================================
// Glyph
// =============================================================

/// Draw one monitor glyph centered at `(x, y)`.
#[allow(clippy::too_many_arguments, clippy::similar_names)]
fn draw_monitor(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    size: f64,
    fill: &str,
    fade: &str,
    glow: &str,
    is_hovered: bool,
    rotation_deg: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(x, y)?;
    ctx.rotate(rotation_deg.to_radians())?;

    let scale = if is_hovered { HOVER_SCALE } else { 1.0 };
    ctx.scale(scale, scale)?;

    let screen_w = size * 1.2;
    let screen_h = size * 0.8;
    let depth = size * 0.15;
    let base_h = size * 0.2;

    ctx.set_shadow_blur(if is_hovered { 30.0 } else { 20.0 });
    ctx.set_shadow_color(glow);

    // Base shadow ellipse under the stand.
    ctx.set_fill_style_str(BASE_SHADOW_FILL);
    ctx.begin_path();
    ctx.ellipse(0.0, screen_h / 2.0 + base_h, size * 0.4, size * 0.15, 0.0, 0.0, 2.0 * PI)?;
    ctx.fill();

    // Stand.
    ctx.set_fill_style_str(STAND_FILL);
    ctx.fill_rect(-size * 0.08, screen_h / 2.0, size * 0.16, base_h);

    // Back panel gives the glyph its slight 3D silhouette.
    ctx.set_fill_style_str(BACK_PANEL_FILL);
    ctx.begin_path();
    ctx.move_to(-screen_w / 2.0 - depth, -screen_h / 2.0);
    ctx.line_to(-screen_w / 2.0, -screen_h / 2.0 - depth);
    ctx.line_to(screen_w / 2.0, -screen_h / 2.0 - depth);
    ctx.line_to(screen_w / 2.0 + depth, -screen_h / 2.0);
    ctx.line_to(screen_w / 2.0 + depth, screen_h / 2.0);
    ctx.line_to(screen_w / 2.0, screen_h / 2.0 - depth);
    ctx.line_to(-screen_w / 2.0, screen_h / 2.0 - depth);
    ctx.line_to(-screen_w / 2.0 - depth, screen_h / 2.0);
    ctx.close_path();
    ctx.fill();

    // Bezel.
    let radius = size * 0.08;
    ctx.set_fill_style_str(BEZEL_FILL);
    ctx.begin_path();
    trace_rounded_rect(ctx, -screen_w / 2.0, -screen_h / 2.0, screen_w, screen_h, radius);
    ctx.fill();

    // Screen: status-colored gradient.
    let gradient = ctx.create_linear_gradient(-screen_w / 2.0, -screen_h / 2.0, screen_w / 2.0, screen_h / 2.0);
    gradient.add_color_stop(0.0, fill)?;
    gradient.add_color_stop(1.0, fade)?;
    ctx.set_fill_style_canvas_gradient(&gradient);

    let pad = size * 0.12;
    ctx.begin_path();
    trace_rounded_rect(
        ctx,
        -screen_w / 2.0 + pad,
        -screen_h / 2.0 + pad,
        screen_w - pad * 2.0,
        screen_h - pad * 2.0,
        radius * 0.5,
    );
    ctx.fill();

    // Shine highlight in the upper-left corner of the screen.
    let shine = ctx.create_linear_gradient(-screen_w / 2.0, -screen_h / 2.0, -screen_w / 4.0, -screen_h / 4.0);
    shine.add_color_stop(0.0, SHINE_START)?;
    shine.add_color_stop(1.0, SHINE_END)?;
    ctx.set_fill_style_canvas_gradient(&shine);
    ctx.begin_path();
    trace_rounded_rect(
        ctx,
        -screen_w / 2.0 + pad,
        -screen_h / 2.0 + pad,
        screen_w * 0.3,
        screen_h * 0.3,
        radius * 0.5,
    );
    ctx.fill();

    ctx.set_shadow_blur(0.0);
    ctx.restore();
    Ok(())
}

/// Draw the station identifier centered on the glyph, rotated with it.
fn draw_label(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    size: f64,
    rotation_deg: f64,
    text: &str,
) -> Result<(), JsValue> {
    let font_px = if size < GLYPH_SIZE_WIDE { 10 } else { 14 };

    ctx.save();
    ctx.translate(x, y)?;
    ctx.rotate(rotation_deg.to_radians())?;
    ctx.set_shadow_blur(0.0);
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(&format!("bold {font_px}px Orbitron"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

/// Draw the sinusoidally pulsing ring around an occupied station.
fn draw_pulse_ring(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    size: f64,
    color: &str,
    line_width: f64,
    now_ms: f64,
) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(line_width);
    ctx.set_global_alpha(pulse_alpha(now_ms));
    ctx.begin_path();
    ctx.arc(x, y, size * PULSE_RADIUS_RATIO, 0.0, 2.0 * PI)?;
    ctx.stroke();
    ctx.set_global_alpha(1.0);
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Append a rounded-rectangle path to the current path.
fn trace_rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let max_r = (w.min(h) / 2.0).max(0.0);
    let r = r.clamp(0.0, max_r);
    ctx.move_to(x + r, y);
    arc_corner(ctx, x + w, y, x + w, y + h, r);
    arc_corner(ctx, x + w, y + h, x, y + h, r);
    arc_corner(ctx, x, y + h, x, y, r);
    arc_corner(ctx, x, y, x + w, y, r);
}

fn arc_corner(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, next_x: f64, next_y: f64, r: f64) {
    if ctx.arc_to(cx, cy, next_x, next_y, r).is_err() {
        ctx.line_to(cx, cy);
    }
}
