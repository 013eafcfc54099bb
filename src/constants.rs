//! Sizing and timing constants for the picker.

/// Handle (draggable indicator) radius
pub const HANDLE_RADIUS: f64 = 11.0;

/// Hue track height
pub const HUE_TRACK_HEIGHT: f64 = 10.0;

/// Vertical gap between the palette area and the hue track
pub const HUE_TRACK_SPACING: f64 = 8.0;

/// Minimum hit-region side for a draggable handle
pub const MIN_TOUCH_TARGET: f64 = 44.0;

/// Vertical inflation of the hue track's tap hit region, per side
pub const HUE_TAP_MARGIN: f64 = 20.0;

/// Pointer travel beyond which an armed tap is abandoned
pub const TAP_SLOP: f64 = 10.0;

/// Minimum intrinsic widget height
pub const MIN_HEIGHT: f32 = 200.0;

/// Hue delta below which the cached palette raster is reused
pub const HUE_REDRAW_EPSILON: f64 = 1e-5;

/// Duration of an animated programmatic color set, in seconds
pub const SET_ANIMATION_SECS: f64 = 0.3;
