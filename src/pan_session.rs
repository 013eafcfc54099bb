//! Per-gesture touch-to-track assignment.
//!
//! A [`PanSession`] lives for the duration of one pan gesture and decides
//! which touch controls the palette handle and which controls the hue
//! handle. It is toolkit-agnostic: callers feed it the current touch
//! locations and each handle's hit region, all in the same coordinate
//! space, and read back candidate handle centers.
//!
//! The session never owns the tracks. A `None` region means the track is
//! absent (or its handle degenerate) and that track is skipped.

use floem::kurbo::{Point, Rect};

/// Hit regions for the two draggable handles, in the picker's coordinate
/// space. Regions are normally produced by [`crate::geometry::touch_target`]
/// so small handles still get a usable hit area.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleRegions {
    /// Palette handle hit region, or `None` to skip the palette track.
    pub palette: Option<Rect>,
    /// Hue handle hit region, or `None` to skip the hue track.
    pub hue: Option<Rect>,
}

/// Candidate handle centers produced by one session update.
///
/// `None` means the track had no assigned touch this update and its handle
/// should stay put.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanUpdate {
    pub palette: Option<Point>,
    pub hue: Option<Point>,
}

/// Ephemeral state for one pan gesture.
///
/// Holds at most one touch-index assignment per track. The two assignments
/// never reference the same index. Dropping the session ends the gesture;
/// a new gesture starts from a fresh session with no assignments.
#[derive(Debug, Default)]
pub struct PanSession {
    palette_touch: Option<usize>,
    hue_touch: Option<usize>,
}

impl PanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pan gesture should begin for the given touches: true when
    /// any touch lies within either handle's hit region.
    pub fn should_begin(touches: &[Point], regions: &HandleRegions) -> bool {
        touches.iter().any(|&p| {
            regions.palette.is_some_and(|r| r.contains(p))
                || regions.hue.is_some_and(|r| r.contains(p))
        })
    }

    /// Resolve touch ownership for one gesture update.
    ///
    /// `touches` are the currently active touch locations in index order.
    /// Assignment is attempted for the palette track first, then the hue
    /// track, scanning touches in ascending index order; the first touch
    /// inside the track's region that the other track does not already own
    /// wins. A touch is only reassigned once it is no longer active.
    pub fn update(&mut self, touches: &[Point], regions: &HandleRegions) -> PanUpdate {
        // A dropped finger may not be observable as an individual event;
        // when more tracks are assigned than touches remain, start over.
        let assigned =
            usize::from(self.palette_touch.is_some()) + usize::from(self.hue_touch.is_some());
        if assigned > touches.len() {
            self.palette_touch = None;
            self.hue_touch = None;
        }

        if self.palette_touch.is_some_and(|i| i >= touches.len()) {
            self.palette_touch = None;
        }
        if self.hue_touch.is_some_and(|i| i >= touches.len()) {
            self.hue_touch = None;
        }

        if self.palette_touch.is_none() {
            if let Some(region) = regions.palette {
                self.palette_touch = (0..touches.len())
                    .find(|&i| Some(i) != self.hue_touch && region.contains(touches[i]));
            }
        }
        if self.hue_touch.is_none() {
            if let Some(region) = regions.hue {
                self.hue_touch = (0..touches.len())
                    .find(|&i| Some(i) != self.palette_touch && region.contains(touches[i]));
            }
        }

        PanUpdate {
            palette: self.palette_touch.map(|i| touches[i]),
            hue: self.hue_touch.map(|i| touches[i]),
        }
    }
}
