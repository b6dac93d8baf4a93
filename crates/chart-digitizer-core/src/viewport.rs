//! Pan/zoom transform between canvas pixels and image pixels.
//!
//! `screen = image * scale + offset`, component-wise. [`ViewportState`] holds
//! the raw transform and its pure operations; [`Viewport`] pairs it with the
//! image and canvas sizes and keeps the pan clamped after every change.

use nalgebra::Vector2;

use crate::{ImagePoint, ScreenPoint, Size};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.25;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 5.0;
/// Multiplicative zoom change per wheel step.
pub const ZOOM_STEP: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Interpret a wheel delta the way browsers report it: negative scrolls
    /// zoom in, positive scrolls zoom out, zero is ignored.
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::In)
        } else if delta > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Offset and scale of the image on the canvas.
///
/// The scale is kept inside `[MIN_SCALE, MAX_SCALE]` by every constructor and
/// operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportState {
    pub const IDENTITY: ViewportState = ViewportState {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Build a state, clamping `scale` into the allowed range.
    pub fn new(offset_x: f64, offset_y: f64, scale: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            scale: clamp_scale(scale),
        }
    }

    fn with_offset(offset: Vector2<f64>, scale: f64) -> Self {
        Self {
            offset_x: offset.x,
            offset_y: offset.y,
            scale,
        }
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[inline]
    pub fn offset(&self) -> Vector2<f64> {
        Vector2::new(self.offset_x, self.offset_y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn screen_to_image(&self, p: ScreenPoint) -> ImagePoint {
        let v = (p.to_vector() - self.offset()) / self.scale;
        ImagePoint::new(v.x, v.y)
    }

    #[inline]
    pub fn image_to_screen(&self, p: ImagePoint) -> ScreenPoint {
        let v = p.to_point2().coords * self.scale + self.offset();
        ScreenPoint::new(v.x, v.y)
    }

    /// Zoom one step around `anchor`.
    ///
    /// The image point under `anchor` stays under `anchor`. The pan is not
    /// clamped here; [`Viewport::zoom_at`] does both.
    pub fn zoom_at(&self, anchor: ScreenPoint, direction: ZoomDirection) -> Self {
        let scale = match direction {
            ZoomDirection::In => self.scale * ZOOM_STEP,
            ZoomDirection::Out => self.scale / ZOOM_STEP,
        };
        self.zoom_to(anchor, scale)
    }

    /// Set an absolute scale while keeping the image point under `anchor` fixed.
    pub fn zoom_to(&self, anchor: ScreenPoint, scale: f64) -> Self {
        let scale = clamp_scale(scale);
        let s = anchor.to_vector();
        let w = (s - self.offset()) / self.scale;
        Self::with_offset(s - w * scale, scale)
    }

    pub fn pan_by(&self, dx: f64, dy: f64) -> Self {
        Self::with_offset(self.offset() + Vector2::new(dx, dy), self.scale)
    }

    /// Project the offset onto the range that keeps the image covering the
    /// canvas.
    ///
    /// Per axis the offset is bounded to `[canvas - image * scale, 0]`. When
    /// the scaled image is smaller than the canvas that range is empty and the
    /// offset is pinned to `0`, anchoring the image at the canvas origin.
    pub fn clamp_pan(&self, bounds: &ViewBounds) -> Self {
        let (image, canvas) = (bounds.image, bounds.canvas);
        Self {
            offset_x: clamp_offset(self.offset_x, canvas.width, image.width * self.scale),
            offset_y: clamp_offset(self.offset_y, canvas.height, image.height * self.scale),
            scale: self.scale,
        }
    }
}

#[inline]
fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[inline]
fn clamp_offset(offset: f64, canvas: f64, scaled_image: f64) -> f64 {
    let lower = canvas - scaled_image;
    // Empty range (or unusable sizes): pin to the origin.
    if lower > 0.0 || lower.is_nan() {
        return 0.0;
    }
    offset.clamp(lower, 0.0)
}

/// Image and canvas extents the pan is clamped against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBounds {
    pub image: Size,
    pub canvas: Size,
}

impl ViewBounds {
    pub fn new(image: Size, canvas: Size) -> Self {
        Self { image, canvas }
    }
}

/// Interactive pan/zoom state for one canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    state: ViewportState,
    bounds: ViewBounds,
}

impl Viewport {
    pub fn new(bounds: ViewBounds) -> Self {
        Self {
            state: ViewportState::IDENTITY.clamp_pan(&bounds),
            bounds,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn screen_to_image(&self, p: ScreenPoint) -> ImagePoint {
        self.state.screen_to_image(p)
    }

    pub fn image_to_screen(&self, p: ImagePoint) -> ScreenPoint {
        self.state.image_to_screen(p)
    }

    /// Anchor-preserving zoom followed by pan clamping.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, direction: ZoomDirection) -> ViewportState {
        self.state = self.state.zoom_at(anchor, direction).clamp_pan(&self.bounds);
        log::trace!(
            "zoom {:?} at ({:.1}, {:.1}) -> scale {:.4}",
            direction,
            anchor.x,
            anchor.y,
            self.state.scale
        );
        self.state
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> ViewportState {
        self.state = self.state.pan_by(dx, dy).clamp_pan(&self.bounds);
        log::trace!(
            "pan by ({:.1}, {:.1}) -> offset ({:.1}, {:.1})",
            dx,
            dy,
            self.state.offset_x,
            self.state.offset_y
        );
        self.state
    }

    /// Back to `{0, 0, 1}`, as on image load.
    pub fn reset(&mut self) {
        self.state = ViewportState::IDENTITY.clamp_pan(&self.bounds);
    }

    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.bounds.canvas = canvas;
        self.state = self.state.clamp_pan(&self.bounds);
    }

    /// A new image also resets the transform.
    pub fn set_image_size(&mut self, image: Size) {
        self.bounds.image = image;
        self.reset();
    }
}
