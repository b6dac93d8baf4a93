//! "What is Y at this X" for a digitized series.
//!
//! Points are mapped through the axis calibration, sorted by real X and
//! linearly interpolated between neighbours. Click order does not matter here.
//!
//! ```
//! use chart_digitizer_core::{AxesConfig, AxisCalibration, ImagePoint};
//! use chart_digitizer_query::{query_y, QueryError};
//! use chart_digitizer_series::SeriesStore;
//!
//! let axes = AxesConfig {
//!     title: String::new(),
//!     x: AxisCalibration {
//!         min: Some(0.0),
//!         max: Some(10.0),
//!         p1: Some(ImagePoint::new(0.0, 100.0)),
//!         p2: Some(ImagePoint::new(100.0, 100.0)),
//!         ..Default::default()
//!     },
//!     y: AxisCalibration {
//!         min: Some(0.0),
//!         max: Some(10.0),
//!         p1: Some(ImagePoint::new(0.0, 100.0)),
//!         p2: Some(ImagePoint::new(0.0, 0.0)),
//!         ..Default::default()
//!     },
//! };
//! let mut store = SeriesStore::new();
//! let id = store.add_series("line", "#000");
//! store.add_point_to_active_series(ImagePoint::new(0.0, 100.0));
//! store.add_point_to_active_series(ImagePoint::new(100.0, 0.0));
//! let series = store.get(&id).unwrap();
//!
//! assert!((query_y(series, &axes, 2.5).unwrap() - 2.5).abs() < 1e-9);
//! assert!(matches!(query_y(series, &axes, 11.0), Err(QueryError::OutOfBounds { .. })));
//! ```

mod error;
mod interpolate;

pub use error::QueryError;
pub use interpolate::{query_series_by_id, query_y, Interpolator, RealSample};
