//! Pointer hit-testing against station glyphs.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::feed::{StationRecord, StatusFeed};
use crate::layout::{Point, Slot};

/// Test which station (if any) is under `pointer`.
///
/// Each slot's hit region is a circle of radius `glyph_size` around its
/// center. Slots whose identifier does not resolve in the feed are not
/// hittable (they are not drawn either). When hit regions overlap, the first
/// slot in layout order wins.
#[must_use]
pub fn hit_test<'a>(
    pointer: Point,
    viewport_w: f64,
    viewport_h: f64,
    glyph_size: f64,
    slots: &[Slot],
    feed: &'a StatusFeed,
) -> Option<&'a StationRecord> {
    slots.iter().find_map(|slot| {
        let center = slot.center(viewport_w, viewport_h);
        if distance(pointer, center) < glyph_size {
            feed.resolve(slot.station)
        } else {
            None
        }
    })
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
