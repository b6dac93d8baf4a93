use std::cmp::Ordering;

use chart_digitizer_core::{AxesConfig, AxisError};
use chart_digitizer_series::{DigitizationDocument, Series, SeriesId};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::QueryError;

/// One series point in real-world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealSample {
    pub x: f64,
    pub y: f64,
}

/// Calibrated, X-sorted samples of one series, reusable across queries.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    samples: Vec<RealSample>,
}

impl Interpolator {
    /// Map every point through both axes, drop non-finite results and sort
    /// by X.
    ///
    /// The sort is stable: points sharing an X keep their click order.
    pub fn new(series: &Series, axes: &AxesConfig) -> Result<Self, AxisError> {
        let (x_line, y_line) = axes.lines()?;
        let mut samples: Vec<RealSample> = series
            .points
            .iter()
            .map(|&p| RealSample {
                x: x_line.map(p),
                y: y_line.map(p),
            })
            .filter(|s| s.x.is_finite() && s.y.is_finite())
            .collect();
        let dropped = series.points.len() - samples.len();
        if dropped > 0 {
            log::warn!(
                "series {}: {} point(s) without finite real coordinates ignored",
                series.id,
                dropped
            );
        }
        samples.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[RealSample] {
        &self.samples
    }

    /// Smallest and largest real X, if there are at least two samples.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match self.samples.as_slice() {
            [first, .., last] => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Interpolated Y at `x`, or `None` when no neighbouring pair brackets it.
    ///
    /// Both ends of a pair are inclusive and the first bracketing pair wins,
    /// so at a shared X the earlier segment answers. NaN brackets nothing.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.samples.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            if !(a.x <= x && x <= b.x) {
                return None;
            }
            if a.x == b.x {
                return Some(a.y);
            }
            let ratio = (x - a.x) / (b.x - a.x);
            Some(a.y + ratio * (b.y - a.y))
        })
    }
}

/// Interpolate the Y value of `series` at real `x`.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(series, axes),
        fields(series = %series.id, points = series.points.len())
    )
)]
pub fn query_y(series: &Series, axes: &AxesConfig, x: f64) -> Result<f64, QueryError> {
    Interpolator::new(series, axes)?
        .y_at(x)
        .ok_or(QueryError::OutOfBounds { x })
}

/// [`query_y`] for a series looked up by id in a document.
pub fn query_series_by_id(
    doc: &DigitizationDocument,
    id: &SeriesId,
    x: f64,
) -> Result<f64, QueryError> {
    let series = doc
        .series()
        .get(id)
        .ok_or_else(|| QueryError::UnknownSeries(id.clone()))?;
    query_y(series, doc.axes(), x)
}
