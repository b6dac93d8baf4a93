use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A coordinate in the untransformed image-pixel space of the chart bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_point2(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_point2(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }

    /// Both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point2<f64>> for ImagePoint {
    fn from(p: Point2<f64>) -> Self {
        Self::from_point2(p)
    }
}

impl From<ImagePoint> for Point2<f64> {
    fn from(p: ImagePoint) -> Self {
        p.to_point2()
    }
}

/// A coordinate on the interactive canvas (after pan and zoom).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Width/height pair in pixels, used for both the bitmap and the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }
}
