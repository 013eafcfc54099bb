//! # floem-palette
//!
//! An HSB palette color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! The picker combines a 2D saturation/brightness palette surface with a hue
//! slider below it; each track carries a draggable circular handle. Dragging
//! or tapping a track moves its handle, clamps it into the track, and
//! publishes the picked color.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_palette::{color_picker, SolidColor};
//!
//! let color = RwSignal::new(SolidColor::from_hex("3B82F6").unwrap());
//! // Use `color_picker(color)` in your Floem view tree; read the signal or
//! // register `.on_change(..)` to observe user picks.
//! ```
//!
//! The multi-touch assignment logic is exposed as [`PanSession`] for
//! embedders whose platforms deliver more than one concurrent pointer.

mod color;
mod constants;
mod geometry;
mod gradient;
mod math;
mod pan_session;
mod picker;

pub use color::SolidColor;
pub use geometry::{clamp_to_rect, hue_from_position, position_to_saturation_brightness, touch_target};
pub use pan_session::{HandleRegions, PanSession, PanUpdate};
pub use picker::{color_picker, ColorPicker, Margins};
