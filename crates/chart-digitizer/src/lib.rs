//! Facade crate for the `chart-digitizer-*` workspace.
//!
//! A chart image is calibrated by clicking two reference points per axis and
//! typing the values they stand for; data series are then digitized by
//! clicking along each curve. This crate re-exports the pieces:
//!
//! - `chart_digitizer::core`: image points, axis calibration, pan/zoom viewport.
//! - `chart_digitizer::series`: series store and the document aggregate.
//! - `chart_digitizer::query`: interpolated Y-at-X queries.
//! - `chart_digitizer::export`: real-world projection, JSON/CSV writers, document files.
//! - `chart_digitizer::probe` (feature `image`): read bitmap dimensions from disk.
//!
//! ## Quickstart
//!
//! ```
//! use chart_digitizer::core::{Axis, ImagePoint};
//! use chart_digitizer::series::{AxisCapture, DigitizationDocument, ImageInfo};
//! use chart_digitizer::query::query_y;
//!
//! let mut doc = DigitizationDocument::with_image(ImageInfo::new(640, 480));
//!
//! let mut capture = AxisCapture::new(Axis::X);
//! capture.click(doc.axes_mut(), ImagePoint::new(40.0, 440.0));
//! capture.click(doc.axes_mut(), ImagePoint::new(600.0, 440.0));
//! capture.select_axis(Axis::Y);
//! capture.click(doc.axes_mut(), ImagePoint::new(40.0, 440.0));
//! capture.click(doc.axes_mut(), ImagePoint::new(40.0, 40.0));
//! doc.axes_mut().x.set_min(Some(0.0));
//! doc.axes_mut().x.set_max(Some(70.0));
//! doc.axes_mut().y.set_min(Some(0.0));
//! doc.axes_mut().y.set_max(Some(100.0));
//!
//! let id = doc.series_mut().add_series("curve", "#ff0000");
//! doc.series_mut().add_point_to_active_series(ImagePoint::new(40.0, 440.0));
//! doc.series_mut().add_point_to_active_series(ImagePoint::new(600.0, 40.0));
//!
//! let series = doc.series().get(&id).unwrap();
//! let y = query_y(series, doc.axes(), 35.0).unwrap();
//! assert!((y - 50.0).abs() < 1e-9);
//! ```

pub use chart_digitizer_core as core;
pub use chart_digitizer_export as export;
pub use chart_digitizer_query as query;
pub use chart_digitizer_series as series;

pub use chart_digitizer_core::{AxesConfig, Axis, AxisCalibration, ImagePoint, Viewport};
pub use chart_digitizer_series::{DigitizationDocument, Series, SeriesId, SeriesStore};

#[cfg(feature = "image")]
pub mod probe;
