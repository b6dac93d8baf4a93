//! Export of digitized chart data in real-world units.
//!
//! [`project_all`] builds the in-memory [`ExportDataset`]; [`write_json`] and
//! [`write_csv`] turn it into text. Document save/load lives in the same
//! crate since it shares the JSON plumbing.

mod config;
mod csv;
mod error;
mod io;
mod json;
mod projection;

pub use crate::csv::{to_csv_string, write_csv};
pub use config::{CsvOptions, ExportOptions, JsonOptions};
pub use error::ExportIoError;
pub use io::{
    load_document, save_document, write_export, write_export_file, ExportFormat,
};
pub use json::{to_json_string, write_json};
pub use projection::{
    project_all, real_points, ExportDataset, ExportSeries, ProjectedPoint, RealCoords,
};
