//! Series store and document model for chart digitizing.
//!
//! A [`DigitizationDocument`] owns the axis calibration and the
//! [`SeriesStore`]; all point placement goes through the store's mutation API.

mod capture;
mod document;
mod id;
mod series;
mod store;

pub use capture::AxisCapture;
pub use document::{DigitizationDocument, ImageInfo};
pub use id::{IdAllocator, SeriesId};
pub use series::Series;
pub use store::{SeriesStore, StoreError};
