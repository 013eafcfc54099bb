//! The color picker control: a saturation/brightness palette surface above
//! a hue track, each with a draggable circular handle.
//!
//! All interaction funnels through one path: pointer events resolve touch
//! ownership via [`PanSession`], the owned touch's location becomes a
//! candidate handle center, the candidate is clamped into its track, and a
//! changed handle publishes the new color through the `RwSignal` and the
//! `on_change` callback.

use std::sync::Arc;
use std::time::Instant;

use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::SolidColor;
use crate::constants;
use crate::geometry;
use crate::gradient;
use crate::math;
use crate::pan_session::{HandleRegions, PanSession, PanUpdate};

/// Layout margins around the palette area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(8.0)
    }
}

impl Margins {
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Track rects derived from the widget size and margins.
///
/// The palette is inset so a handle centered on its edge stays fully
/// visible; the hue track spans the palette's width near the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackLayout {
    palette: Rect,
    hue_track: Rect,
}

/// Compute both track rects, or `None` when the widget is too small for
/// either track to have positive size.
fn track_layout(width: f64, height: f64, margins: Margins) -> Option<TrackLayout> {
    let r = constants::HANDLE_RADIUS;
    let d = r * 2.0;

    let palette = Rect::new(
        margins.left + r,
        margins.top + r,
        width - margins.right - r,
        height - margins.bottom - d - constants::HUE_TRACK_SPACING,
    );

    let hue_center_y = height - margins.bottom - r;
    let hue_track = Rect::new(
        palette.x0,
        hue_center_y - constants::HUE_TRACK_HEIGHT / 2.0,
        palette.x1,
        hue_center_y + constants::HUE_TRACK_HEIGHT / 2.0,
    );

    if palette.width() <= 0.0 || palette.height() <= 0.0 {
        return None;
    }
    Some(TrackLayout { palette, hue_track })
}

/// Current track values plus the handle clamping/update rules shared by pan
/// and tap handling. Pure state; publishing and repainting stay in the view.
#[derive(Debug, Clone, Copy)]
struct TrackState {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl TrackState {
    fn palette_handle_center(&self, layout: &TrackLayout) -> Point {
        Point::new(
            layout.palette.x0 + self.saturation * layout.palette.width(),
            layout.palette.y0 + (1.0 - self.brightness) * layout.palette.height(),
        )
    }

    fn hue_handle_center(&self, layout: &TrackLayout) -> Point {
        Point::new(
            layout.hue_track.x0 + self.hue * layout.hue_track.width(),
            layout.hue_track.center().y,
        )
    }

    /// Clamp `candidate` into the palette rect and move the handle there.
    /// Returns whether the handle actually moved.
    fn update_palette_handle(&mut self, candidate: Point, layout: &TrackLayout) -> bool {
        let center = geometry::clamp_to_rect(candidate, layout.palette);
        if center == self.palette_handle_center(layout) {
            return false;
        }
        let (s, b) = geometry::position_to_saturation_brightness(center, layout.palette);
        self.saturation = s;
        self.brightness = b;
        true
    }

    /// Clamp `candidate.x` into the hue track (y is pinned to the track
    /// center) and move the handle there. Returns whether it moved.
    fn update_hue_handle(&mut self, candidate: Point, layout: &TrackLayout) -> bool {
        let center = Point::new(
            candidate.x.clamp(layout.hue_track.x0, layout.hue_track.x1),
            layout.hue_track.center().y,
        );
        if center == self.hue_handle_center(layout) {
            return false;
        }
        self.hue = geometry::hue_from_position(center.x, layout.hue_track);
        true
    }

    /// Apply one pan session update. Both tracks are always evaluated; a
    /// palette change must not short-circuit the hue update.
    fn apply_pan_update(&mut self, update: PanUpdate, layout: &TrackLayout) -> bool {
        let mut changed = false;
        if let Some(p) = update.palette {
            changed |= self.update_palette_handle(p, layout);
        }
        if let Some(p) = update.hue {
            changed |= self.update_hue_handle(p, layout);
        }
        changed
    }

    /// Resolve a tap: the palette takes the first touch inside the palette
    /// rect, the hue track the first touch inside its vertically inflated
    /// hit region. Both may update from one tap.
    fn handle_tap(&mut self, touches: &[Point], layout: &TrackLayout) -> bool {
        let mut changed = false;
        if let Some(p) = touches.iter().copied().find(|p| layout.palette.contains(*p)) {
            changed |= self.update_palette_handle(p, layout);
        }
        let hue_hit = layout.hue_track.inflate(0.0, constants::HUE_TAP_MARGIN);
        if let Some(p) = touches.iter().copied().find(|p| hue_hit.contains(*p)) {
            changed |= self.update_hue_handle(p, layout);
        }
        changed
    }

    /// Hit regions for both handles, inflated to the minimum touch target.
    fn handle_regions(&self, layout: &TrackLayout) -> HandleRegions {
        let r = constants::HANDLE_RADIUS;
        let pc = self.palette_handle_center(layout);
        let hc = self.hue_handle_center(layout);
        HandleRegions {
            palette: Some(geometry::touch_target(Rect::new(
                pc.x - r,
                pc.y - r,
                pc.x + r,
                pc.y + r,
            ))),
            hue: Some(geometry::touch_target(Rect::new(
                hc.x - r,
                hc.y - r,
                hc.x + r,
                hc.y + r,
            ))),
        }
    }
}

/// In-flight ease of the handles toward a programmatically set color.
struct SetAnimation {
    from: (f64, f64, f64),
    to: (f64, f64, f64),
    start: Instant,
}

enum PickerUpdate {
    SetColor(SolidColor),
}

pub struct ColorPicker {
    id: ViewId,
    state: TrackState,
    alpha: f64,
    margins: Margins,
    animate_sets: bool,
    size: floem::taffy::prelude::Size<f32>,
    session: Option<PanSession>,
    tap_origin: Option<Point>,
    anim: Option<SetAnimation>,
    on_change: Option<Box<dyn Fn(SolidColor)>>,
    color: RwSignal<SolidColor>,
    /// Cached palette raster, rebuilt when the hue or physical size change.
    palette_img: Option<peniko::Image>,
    palette_hash: Vec<u8>,
    palette_hue: f64,
    palette_dims: (u32, u32),
    /// Cached hue strip raster, rebuilt on physical size change.
    hue_img: Option<peniko::Image>,
    hue_hash: Vec<u8>,
    hue_dims: (u32, u32),
}

/// Creates the color picker control.
///
/// The picker reads from and writes to `color`: programmatic sets through
/// the signal reposition both handles without firing `on_change`; user
/// interaction writes the picked color back and fires `on_change`.
pub fn color_picker(color: RwSignal<SolidColor>) -> ColorPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(PickerUpdate::SetColor(c));
    });

    let initial = color.get_untracked();
    let (hue, saturation, brightness) = initial.to_hsb();

    ColorPicker {
        id,
        state: TrackState {
            hue,
            saturation,
            brightness,
        },
        alpha: initial.a(),
        margins: Margins::default(),
        animate_sets: false,
        size: Default::default(),
        session: None,
        tap_origin: None,
        anim: None,
        on_change: None,
        color,
        palette_img: None,
        palette_hash: Vec::new(),
        palette_hue: f64::NAN,
        palette_dims: (0, 0),
        hue_img: None,
        hue_hash: Vec::new(),
        hue_dims: (0, 0),
    }
    .style(|s| {
        s.min_height(constants::MIN_HEIGHT)
            .width_full()
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorPicker {
    /// Registers a callback fired whenever user interaction (pan or tap)
    /// moves a handle. Never fired for programmatic sets.
    pub fn on_change(mut self, f: impl Fn(SolidColor) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the layout margins around the palette area.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// When enabled, programmatic sets ease the handles to their new
    /// positions over [`constants::SET_ANIMATION_SECS`].
    pub fn animate_sets(mut self, animate: bool) -> Self {
        self.animate_sets = animate;
        self
    }

    fn current_layout(&self) -> Option<TrackLayout> {
        track_layout(self.size.width as f64, self.size.height as f64, self.margins)
    }

    /// Publish the current track values as the picked color: at most one
    /// notification per gesture update.
    fn publish(&mut self) {
        // User interaction overrides an in-flight set animation.
        self.anim = None;
        let new = SolidColor::from_hsb(
            self.state.hue,
            self.state.saturation,
            self.state.brightness,
            self.alpha,
        );
        if !approx_eq(new, self.color.get_untracked()) {
            self.color.set(new);
        }
        if let Some(cb) = &self.on_change {
            cb(new);
        }
        self.id.request_layout();
    }

    /// Programmatic set arriving through the signal. Repositions both
    /// handles, fires no notification.
    fn apply_set_color(&mut self, c: SolidColor) {
        // Ignore the echo of a color this picker just published.
        let current = SolidColor::from_hsb(
            self.state.hue,
            self.state.saturation,
            self.state.brightness,
            self.alpha,
        );
        if approx_eq(c, current) {
            return;
        }

        let from = (self.state.hue, self.state.saturation, self.state.brightness);
        let (h, s, b) = c.to_hsb();
        // Achromatic colors carry no hue; keep the current hue handle.
        if s > 0.001 && b > 0.001 {
            self.state.hue = h;
        }
        self.state.saturation = s;
        self.state.brightness = b;
        self.alpha = c.a();

        if self.animate_sets {
            self.anim = Some(SetAnimation {
                from,
                to: (self.state.hue, self.state.saturation, self.state.brightness),
                start: Instant::now(),
            });
        }
        self.id.request_layout();
    }

    /// Track values to draw this frame: mid-animation the handles follow
    /// the eased value while the published color is already at the target.
    fn display_hsb(&mut self) -> (f64, f64, f64) {
        if let Some(anim) = &self.anim {
            let t = anim.start.elapsed().as_secs_f64() / constants::SET_ANIMATION_SECS;
            if t < 1.0 {
                let k = math::ease_in_out(t);
                let (from, to) = (anim.from, anim.to);
                // Keep frames coming while the ease is in flight.
                self.id.request_layout();
                return (
                    from.0 + (to.0 - from.0) * k,
                    from.1 + (to.1 - from.1) * k,
                    from.2 + (to.2 - from.2) * k,
                );
            }
            self.anim = None;
        }
        (self.state.hue, self.state.saturation, self.state.brightness)
    }

    fn ensure_palette_image(&mut self, rect: Rect, hue: f64, scale: f64) {
        let s = scale.max(1.0);
        let pw = (rect.width() * s).round() as u32;
        let ph = (rect.height() * s).round() as u32;
        if pw == 0 || ph == 0 {
            log::warn!("palette raster target is empty ({pw}x{ph}); skipping draw");
            return;
        }

        let dims = (pw, ph);
        if self.palette_dims == dims
            && (hue - self.palette_hue).abs() <= constants::HUE_REDRAW_EPSILON
        {
            return;
        }

        let pixels = gradient::rasterize_palette(pw, ph, hue);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.palette_hash = blob.id().to_le_bytes().to_vec();
        self.palette_img = Some(img);
        self.palette_hue = hue;
        self.palette_dims = dims;
    }

    fn ensure_hue_image(&mut self, rect: Rect, scale: f64) {
        let s = scale.max(1.0);
        let pw = (rect.width() * s).round() as u32;
        let ph = (rect.height() * s).round() as u32;
        if pw == 0 || ph == 0 {
            log::warn!("hue raster target is empty ({pw}x{ph}); skipping draw");
            return;
        }

        let dims = (pw, ph);
        if self.hue_dims == dims {
            return;
        }

        let pixels = gradient::rasterize_hue_track(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.hue_hash = blob.id().to_le_bytes().to_vec();
        self.hue_img = Some(img);
        self.hue_dims = dims;
    }
}

impl View for ColorPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::SetColor(c) => self.apply_set_color(c),
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let Some(layout) = self.current_layout() else {
                    return EventPropagation::Continue;
                };
                cx.update_active(self.id());
                let touches = [e.pos];
                let regions = self.state.handle_regions(&layout);
                if PanSession::should_begin(&touches, &regions) {
                    let mut session = PanSession::new();
                    let update = session.update(&touches, &regions);
                    self.session = Some(session);
                    if self.state.apply_pan_update(update, &layout) {
                        self.publish();
                    }
                } else {
                    self.tap_origin = Some(e.pos);
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if let Some(origin) = self.tap_origin {
                    if origin.distance(e.pos) > constants::TAP_SLOP {
                        self.tap_origin = None;
                    }
                }
                let Some(layout) = self.current_layout() else {
                    return EventPropagation::Continue;
                };
                let regions = self.state.handle_regions(&layout);
                let touches = [e.pos];
                let update = self
                    .session
                    .as_mut()
                    .map(|session| session.update(&touches, &regions));
                match update {
                    Some(update) => {
                        if self.state.apply_pan_update(update, &layout) {
                            self.publish();
                        }
                        EventPropagation::Stop
                    }
                    None => EventPropagation::Continue,
                }
            }
            Event::PointerUp(e) => {
                let had_session = self.session.take().is_some();
                if !had_session && self.tap_origin.is_some() {
                    if let Some(layout) = self.current_layout() {
                        if self.state.handle_tap(&[e.pos], &layout) {
                            self.publish();
                        }
                    }
                }
                self.tap_origin = None;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                // No dedicated cancel event; focus loss ends the gesture.
                self.session = None;
                self.tap_origin = None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(layout) = self.current_layout() else {
            // Degenerate surface: skip the render pass.
            return;
        };

        let (hue, saturation, brightness) = self.display_hsb();
        let scale = cx.scale();

        // Palette surface
        self.ensure_palette_image(layout.palette, hue, scale);
        if let Some(ref img) = self.palette_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.palette_hash,
                },
                layout.palette,
            );
        }

        // Hue track, clipped to a pill shape
        let pill = layout
            .hue_track
            .to_rounded_rect(layout.hue_track.height() / 2.0);
        cx.save();
        cx.clip(&pill);
        self.ensure_hue_image(layout.hue_track, scale);
        if let Some(ref img) = self.hue_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.hue_hash,
                },
                layout.hue_track,
            );
        }
        cx.restore();

        // Handles on top of their tracks
        let display = TrackState {
            hue,
            saturation,
            brightness,
        };
        let (r, g, b) = math::hsb_to_rgb(hue, saturation, brightness);
        paint_handle(
            cx,
            display.palette_handle_center(&layout),
            Color::rgba(r, g, b, 1.0),
        );
        let (hr, hg, hb) = math::hsb_to_rgb(hue, 1.0, 1.0);
        paint_handle(
            cx,
            display.hue_handle_center(&layout),
            Color::rgba(hr, hg, hb, 1.0),
        );
    }
}

/// Circular handle: current color fill, white ring, thin dark contrast ring.
fn paint_handle(cx: &mut PaintCx, center: Point, fill: Color) {
    let radius = constants::HANDLE_RADIUS;
    let circle = Circle::new(center, radius);
    cx.fill(&circle, fill, 0.0);
    cx.stroke(
        &Circle::new(center, radius + 1.0),
        Color::rgba8(0, 0, 0, 80),
        &Stroke::new(1.0),
    );
    cx.stroke(&circle, Color::WHITE, &Stroke::new(2.0));
}

fn approx_eq(a: SolidColor, b: SolidColor) -> bool {
    (a.r() - b.r()).abs() < 0.001
        && (a.g() - b.g()).abs() < 0.001
        && (a.b() - b.b()).abs() < 0.001
        && (a.a() - b.a()).abs() < 0.001
}
