//! Pointer-to-value coordinate mapping for the two tracks.
//!
//! Pure functions over `kurbo` points and rects. None of these guard against
//! degenerate (zero or negative size) bounds; callers skip the update when a
//! track rect is degenerate so the previous value is retained.

use floem::kurbo::{Point, Rect};

use crate::constants;

/// Clamp a point into `bounds` on both axes.
pub fn clamp_to_rect(p: Point, bounds: Rect) -> Point {
    Point::new(p.x.clamp(bounds.x0, bounds.x1), p.y.clamp(bounds.y0, bounds.y1))
}

/// Map a position within the palette rect to (saturation, brightness).
///
/// The point is clamped into `bounds` first, so positions outside the
/// palette resolve to the nearest edge value. x runs saturation 0.0 → 1.0
/// left to right; y runs brightness 1.0 → 0.0 top to bottom.
pub fn position_to_saturation_brightness(p: Point, bounds: Rect) -> (f64, f64) {
    let p = clamp_to_rect(p, bounds);
    let s = (p.x - bounds.x0) / bounds.width();
    let b = 1.0 - (p.y - bounds.y0) / bounds.height();
    (s.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Map an x position on the hue track to a hue in 0.0–1.0.
pub fn hue_from_position(x: f64, track: Rect) -> f64 {
    ((x - track.x0) / track.width()).clamp(0.0, 1.0)
}

/// Hit-test region for a handle: `rect` inflated per axis so each side is at
/// least [`constants::MIN_TOUCH_TARGET`] units, centered on the original.
/// Sides already larger than the minimum are left unchanged.
pub fn touch_target(rect: Rect) -> Rect {
    let dx = ((constants::MIN_TOUCH_TARGET - rect.width()) / 2.0).max(0.0);
    let dy = ((constants::MIN_TOUCH_TARGET - rect.height()) / 2.0).max(0.0);
    rect.inflate(dx, dy)
}
