//! Core geometry for digitizing raster charts.
//!
//! This crate is small and purely geometric. It knows nothing about image
//! decoding or rendering; it only maps between canvas pixels, image pixels and
//! calibrated real-world values.
//!
//! ```
//! use chart_digitizer_core::{AxisCalibration, ImagePoint};
//!
//! let axis = AxisCalibration {
//!     label: "Temperature".into(),
//!     min: Some(0.0),
//!     max: Some(100.0),
//!     p1: Some(ImagePoint::new(40.0, 300.0)),
//!     p2: Some(ImagePoint::new(440.0, 300.0)),
//! };
//! assert_eq!(axis.map_to_real(ImagePoint::new(240.0, 310.0)), Ok(50.0));
//! ```

mod calibration;
mod point;
mod viewport;

pub use calibration::{
    AxesConfig, Axis, AxisCalibration, AxisError, CalibrationError, CalibrationLine,
};
pub use point::{ImagePoint, ScreenPoint, Size};
pub use viewport::{
    ViewBounds, Viewport, ViewportState, ZoomDirection, MAX_SCALE, MIN_SCALE, ZOOM_STEP,
};
