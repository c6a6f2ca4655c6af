//! Top-level grid engine.
//!
//! ARCHITECTURE
//! ============
//! [`GridCore`] holds everything that does not depend on the canvas element —
//! the status feed, hover state, and viewport metrics — so input handling and
//! resolution logic are testable without a browser. [`Grid`] wraps a core
//! together with the `<canvas>` element and is the type the host component
//! drives.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::consts::{
    GLYPH_SIZE_MEDIUM, GLYPH_SIZE_NARROW, GLYPH_SIZE_WIDE, MEDIUM_BREAKPOINT_PX, NARROW_BREAKPOINT_PX,
};
use crate::feed::{StationRecord, StatusFeed};
use crate::hit;
use crate::layout::{LOUNGE_LAYOUT, Point, Slot};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hover state changed; the host should update the CSS cursor.
    SetCursor(&'static str),
    /// A station glyph was clicked; the host opens the detail view with this
    /// snapshot of the record.
    StationChosen(StationRecord),
}

/// Core grid state — all logic that doesn't depend on the canvas element.
pub struct GridCore {
    pub feed: StatusFeed,
    /// Identifier of the hovered station record, if any. Stored as the feed's
    /// own key so rendering can compare against resolved records directly.
    pub hovered: Option<String>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    slots: &'static [Slot],
}

impl Default for GridCore {
    fn default() -> Self {
        Self {
            feed: StatusFeed::default(),
            hovered: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            slots: &LOUNGE_LAYOUT,
        }
    }
}

impl GridCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live status feed (e.g. after a poll).
    ///
    /// A hovered station that no longer resolves is un-hovered so stale
    /// highlight state cannot outlive the record it pointed at.
    pub fn set_feed(&mut self, feed: StatusFeed) {
        self.feed = feed;
        let stale = self
            .hovered
            .as_deref()
            .is_some_and(|hovered| self.feed.resolve(hovered).is_none());
        if stale {
            self.hovered = None;
        }
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    /// Glyph size for the current viewport width.
    #[must_use]
    pub fn glyph_size(&self) -> f64 {
        glyph_size_for_width(self.viewport_width)
    }

    /// The layout slots this grid draws.
    #[must_use]
    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Handle pointer movement: update hover state and report cursor changes.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let hit = self.hit(pointer).map(|record| record.number.clone());
        if hit == self.hovered {
            return Vec::new();
        }
        self.hovered = hit;
        let cursor = if self.hovered.is_some() { "pointer" } else { "default" };
        vec![Action::SetCursor(cursor)]
    }

    /// Handle the pointer leaving the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.hovered.take().is_none() {
            return Vec::new();
        }
        vec![Action::SetCursor("default")]
    }

    /// Handle a click: report the chosen station's current status snapshot.
    #[must_use]
    pub fn on_click(&self, pointer: Point) -> Vec<Action> {
        match self.hit(pointer) {
            Some(record) => vec![Action::StationChosen(record.clone())],
            None => Vec::new(),
        }
    }

    fn hit(&self, pointer: Point) -> Option<&StationRecord> {
        hit::hit_test(
            pointer,
            self.viewport_width,
            self.viewport_height,
            self.glyph_size(),
            self.slots,
            &self.feed,
        )
    }
}

/// Glyph size for a given viewport width in CSS pixels.
#[must_use]
pub fn glyph_size_for_width(width: f64) -> f64 {
    if width < NARROW_BREAKPOINT_PX {
        GLYPH_SIZE_NARROW
    } else if width < MEDIUM_BREAKPOINT_PX {
        GLYPH_SIZE_MEDIUM
    } else {
        GLYPH_SIZE_WIDE
    }
}

/// The full floor grid. Wraps [`GridCore`] and owns the browser canvas.
pub struct Grid {
    canvas: HtmlCanvasElement,
    pub core: GridCore,
}

impl Grid {
    /// Create a new grid bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: GridCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn set_feed(&mut self, feed: StatusFeed) {
        self.core.set_feed(feed);
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let backing_w = (width_css * dpr).round().max(1.0);
        let backing_h = (height_css * dpr).round().max(1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            if f64::from(self.canvas.width()) != backing_w {
                self.canvas.set_width(backing_w as u32);
            }
            if f64::from(self.canvas.height()) != backing_h {
                self.canvas.set_height(backing_h as u32);
            }
        }
    }

    // --- Delegated input events ---

    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        self.core.on_pointer_move(pointer)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    #[must_use]
    pub fn on_click(&self, pointer: Point) -> Vec<Action> {
        self.core.on_click(pointer)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// `now_ms` drives the occupied pulse phase; the host passes the current
    /// wall-clock timestamp each frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a canvas call fails.
    pub fn render(&self, now_ms: f64) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core, now_ms)
    }
}
