//! Two-point axis calibration.
//!
//! Each axis is calibrated on its own: two clicked reference points define a
//! line in image-pixel space, and a `[min, max]` range assigns real values to
//! the two ends. A pixel is mapped to a real value by projecting it onto that
//! line. The X and Y lines are never combined into a joint affine basis, so a
//! chart whose axes are not perpendicular maps each coordinate along its own
//! line.

use std::fmt;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::ImagePoint;

/// Logical chart axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Why an axis cannot map pixels to real values.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("first reference point is not set")]
    MissingFirstPoint,
    #[error("second reference point is not set")]
    MissingSecondPoint,
    #[error("minimum value is not set")]
    MissingMin,
    #[error("maximum value is not set")]
    MissingMax,
    #[error("range bounds must be finite numbers")]
    NonFiniteRange,
    #[error("reference points coincide, calibration vector has zero length")]
    DegenerateVector,
    #[error("point to map has a non-finite coordinate")]
    NonFinitePoint,
}

/// Calibration failure tagged with the axis it belongs to.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{axis} axis is not calibrated: {source}")]
pub struct AxisError {
    pub axis: Axis,
    #[source]
    pub source: CalibrationError,
}

/// User-editable calibration state of one axis.
///
/// Every field may be missing while the user is still defining the axis; the
/// calibration only becomes usable once [`AxisCalibration::line`] succeeds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisCalibration {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub p1: Option<ImagePoint>,
    #[serde(default)]
    pub p2: Option<ImagePoint>,
}

impl AxisCalibration {
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_min(&mut self, min: Option<f64>) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: Option<f64>) {
        self.max = max;
    }

    /// Replace both reference points at once.
    pub fn set_points(&mut self, p1: ImagePoint, p2: ImagePoint) {
        self.p1 = Some(p1);
        self.p2 = Some(p2);
    }

    pub fn clear_points(&mut self) {
        self.p1 = None;
        self.p2 = None;
    }

    /// Validate the fields and build the projection line.
    pub fn line(&self) -> Result<CalibrationLine, CalibrationError> {
        let p1 = self.p1.ok_or(CalibrationError::MissingFirstPoint)?;
        let p2 = self.p2.ok_or(CalibrationError::MissingSecondPoint)?;
        let min = self.min.ok_or(CalibrationError::MissingMin)?;
        let max = self.max.ok_or(CalibrationError::MissingMax)?;
        CalibrationLine::new(p1, p2, min, max)
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.line().is_ok()
    }

    /// Map an image-pixel point to this axis' real value.
    ///
    /// Points whose projection falls outside the `p1..p2` segment are pinned to
    /// the nearest end value; nothing is extrapolated. A point with a NaN or
    /// infinite coordinate has no real value.
    pub fn map_to_real(&self, point: ImagePoint) -> Result<f64, CalibrationError> {
        let line = self.line()?;
        if !point.is_finite() {
            return Err(CalibrationError::NonFinitePoint);
        }
        Ok(line.map(point))
    }
}

/// A validated calibration: `p1 != p2` and a finite `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationLine {
    origin: Point2<f64>,
    direction: Vector2<f64>,
    norm_sq: f64,
    min: f64,
    max: f64,
}

impl CalibrationLine {
    pub fn new(
        p1: ImagePoint,
        p2: ImagePoint,
        min: f64,
        max: f64,
    ) -> Result<Self, CalibrationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CalibrationError::NonFiniteRange);
        }
        let origin = p1.to_point2();
        let direction = p2.to_point2() - origin;
        let norm_sq = direction.norm_squared();
        // Also rejects NaN/inf coordinates and vectors whose square underflows.
        if !(norm_sq > 0.0 && norm_sq.is_finite()) {
            return Err(CalibrationError::DegenerateVector);
        }
        Ok(Self {
            origin,
            direction,
            norm_sq,
            min,
            max,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Unclamped scalar projection ratio: 0 at `p1`, 1 at `p2`.
    #[inline]
    pub fn ratio(&self, point: ImagePoint) -> f64 {
        let d = point.to_point2() - self.origin;
        d.dot(&self.direction) / self.norm_sq
    }

    /// Clamped real value. NaN for a non-finite `point`.
    #[inline]
    pub fn map(&self, point: ImagePoint) -> f64 {
        let t = self.ratio(point).clamp(0.0, 1.0);
        self.min + t * (self.max - self.min)
    }
}

/// Calibration of both axes plus the chart title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x: AxisCalibration,
    #[serde(default)]
    pub y: AxisCalibration,
}

impl AxesConfig {
    pub fn axis(&self, axis: Axis) -> &AxisCalibration {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisCalibration {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn is_calibrated(&self) -> bool {
        self.x.is_defined() && self.y.is_defined()
    }

    /// Resolve both lines, reporting the first axis that is not usable.
    pub fn lines(&self) -> Result<(CalibrationLine, CalibrationLine), AxisError> {
        let x = self.x.line().map_err(|source| AxisError {
            axis: Axis::X,
            source,
        })?;
        let y = self.y.line().map_err(|source| AxisError {
            axis: Axis::Y,
            source,
        })?;
        Ok((x, y))
    }

    /// Map one point through both axes independently.
    pub fn map_to_real(
        &self,
        point: ImagePoint,
    ) -> (Result<f64, CalibrationError>, Result<f64, CalibrationError>) {
        (self.x.map_to_real(point), self.y.map_to_real(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn horizontal_axis() -> AxisCalibration {
        AxisCalibration {
            label: "Pressure".into(),
            min: Some(0.0),
            max: Some(10.0),
            p1: Some(ImagePoint::new(0.0, 100.0)),
            p2: Some(ImagePoint::new(100.0, 100.0)),
        }
    }

    #[test]
    fn projects_inside_segment() {
        let axis = horizontal_axis();
        assert_abs_diff_eq!(
            axis.map_to_real(ImagePoint::new(50.0, 100.0)).unwrap(),
            5.0,
            epsilon = 1e-12
        );
        // Off-line points use their projection only.
        assert_abs_diff_eq!(
            axis.map_to_real(ImagePoint::new(25.0, 40.0)).unwrap(),
            2.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn clamps_outside_segment() {
        let axis = horizontal_axis();
        assert_eq!(axis.map_to_real(ImagePoint::new(-50.0, 100.0)), Ok(0.0));
        assert_eq!(axis.map_to_real(ImagePoint::new(150.0, 100.0)), Ok(10.0));
    }

    #[test]
    fn inverted_range_maps_downwards() {
        // Typical Y axis: clicked bottom-to-top, pixel y decreases as value grows.
        let axis = AxisCalibration {
            label: String::new(),
            min: Some(0.0),
            max: Some(200.0),
            p1: Some(ImagePoint::new(10.0, 400.0)),
            p2: Some(ImagePoint::new(10.0, 0.0)),
        };
        assert_abs_diff_eq!(
            axis.map_to_real(ImagePoint::new(300.0, 300.0)).unwrap(),
            50.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn missing_fields_are_undefined() {
        let mut axis = horizontal_axis();
        axis.p1 = None;
        assert_eq!(
            axis.map_to_real(ImagePoint::new(50.0, 100.0)),
            Err(CalibrationError::MissingFirstPoint)
        );

        let mut axis = horizontal_axis();
        axis.p2 = None;
        assert_eq!(axis.line(), Err(CalibrationError::MissingSecondPoint));

        let mut axis = horizontal_axis();
        axis.set_min(None);
        assert_eq!(axis.line(), Err(CalibrationError::MissingMin));

        let mut axis = horizontal_axis();
        axis.set_max(None);
        assert_eq!(axis.line(), Err(CalibrationError::MissingMax));

        assert!(!AxisCalibration::default().is_defined());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let mut axis = horizontal_axis();
        axis.set_points(ImagePoint::new(3.0, 3.0), ImagePoint::new(3.0, 3.0));
        assert_eq!(
            axis.map_to_real(ImagePoint::new(3.0, 3.0)),
            Err(CalibrationError::DegenerateVector)
        );
    }

    #[test]
    fn non_finite_range_is_rejected() {
        let mut axis = horizontal_axis();
        axis.set_max(Some(f64::NAN));
        assert_eq!(axis.line(), Err(CalibrationError::NonFiniteRange));
    }

    #[test]
    fn non_finite_point_has_no_real_value() {
        let axis = horizontal_axis();
        for p in [
            ImagePoint::new(f64::NAN, 100.0),
            ImagePoint::new(f64::INFINITY, 100.0),
            ImagePoint::new(50.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(axis.map_to_real(p), Err(CalibrationError::NonFinitePoint));
        }
        // Calibration problems are reported first.
        assert_eq!(
            AxisCalibration::default().map_to_real(ImagePoint::new(f64::NAN, 0.0)),
            Err(CalibrationError::MissingFirstPoint)
        );
    }

    #[test]
    fn axes_report_first_failing_axis() {
        let axes = AxesConfig {
            title: "chart".into(),
            x: horizontal_axis(),
            y: AxisCalibration::default(),
        };
        let err = axes.lines().unwrap_err();
        assert_eq!(err.axis, Axis::Y);
        assert_eq!(err.source, CalibrationError::MissingFirstPoint);
        assert!(!axes.is_calibrated());
        assert_eq!(
            err.to_string(),
            "y axis is not calibrated: first reference point is not set"
        );
    }

    #[test]
    fn field_edits_keep_the_rest() {
        let mut axes = AxesConfig {
            title: "t".into(),
            x: horizontal_axis(),
            y: horizontal_axis(),
        };
        axes.axis_mut(Axis::Y).set_label("Altitude");
        assert_eq!(axes.y.label, "Altitude");
        assert_eq!(axes.y.min, Some(0.0));
        assert_eq!(axes.x, horizontal_axis());
        assert_eq!(axes.title, "t");
    }
}
