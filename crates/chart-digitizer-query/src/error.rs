use chart_digitizer_core::AxisError;
use chart_digitizer_series::SeriesId;

/// Why a Y-at-X query produced no number.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// An axis lacks a usable calibration; the answer is undefined.
    #[error(transparent)]
    Uncalibrated(#[from] AxisError),
    /// No pair of neighbouring points brackets `x`.
    #[error("out of bounds: no digitized segment covers x = {x}")]
    OutOfBounds { x: f64 },
    #[error("unknown series {0}")]
    UnknownSeries(SeriesId),
}

impl QueryError {
    pub fn is_undefined(&self) -> bool {
        matches!(self, QueryError::Uncalibrated(_))
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, QueryError::OutOfBounds { .. })
    }
}
