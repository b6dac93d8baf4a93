//! Apply the axis calibration to every point of every series.

use chart_digitizer_core::{AxesConfig, CalibrationLine, ImagePoint};
use chart_digitizer_series::{DigitizationDocument, Series};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Real-world coordinates of one point. `None` means the axis is not
/// calibrated (serialized as `null`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RealCoords {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub pixel: ImagePoint,
    pub real: RealCoords,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ProjectedPoint>,
}

/// The complete real-world dataset handed to serializers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDataset {
    pub title: String,
    #[serde(rename = "xAxisLabel")]
    pub x_label: String,
    #[serde(rename = "yAxisLabel")]
    pub y_label: String,
    pub series: Vec<ExportSeries>,
}

impl ExportDataset {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Lines resolved once per projection; an undefined axis stays `None`.
struct ResolvedAxes {
    x: Option<CalibrationLine>,
    y: Option<CalibrationLine>,
}

impl ResolvedAxes {
    fn new(axes: &AxesConfig) -> Self {
        Self {
            x: axes.x.line().ok(),
            y: axes.y.line().ok(),
        }
    }

    fn project(&self, pixel: ImagePoint) -> ProjectedPoint {
        let map = |line: &Option<CalibrationLine>| {
            line.as_ref()
                .map(|l| l.map(pixel))
                .filter(|v| v.is_finite())
        };
        ProjectedPoint {
            pixel,
            real: RealCoords {
                x: map(&self.x),
                y: map(&self.y),
            },
        }
    }
}

/// Project the points of one series, in click order.
pub fn real_points(series: &Series, axes: &AxesConfig) -> Vec<ProjectedPoint> {
    let resolved = ResolvedAxes::new(axes);
    series.points.iter().map(|&p| resolved.project(p)).collect()
}

/// Project the whole document.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(doc)))]
pub fn project_all(doc: &DigitizationDocument) -> ExportDataset {
    let axes = doc.axes();
    let resolved = ResolvedAxes::new(axes);
    if resolved.x.is_none() || resolved.y.is_none() {
        log::debug!("projecting with an uncalibrated axis, real values will be null");
    }
    let series = doc
        .series()
        .series()
        .iter()
        .map(|s| ExportSeries {
            name: s.name.clone(),
            color: s.color.clone(),
            points: s.points.iter().map(|&p| resolved.project(p)).collect(),
        })
        .collect();
    ExportDataset {
        title: axes.title.clone(),
        x_label: axes.x.label.clone(),
        y_label: axes.y.label.clone(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chart_digitizer_core::{Axis, AxisCalibration};

    fn calibrated() -> AxesConfig {
        AxesConfig {
            title: "Climb".into(),
            x: AxisCalibration {
                label: "Temperature".into(),
                min: Some(-20.0),
                max: Some(40.0),
                p1: Some(ImagePoint::new(0.0, 600.0)),
                p2: Some(ImagePoint::new(600.0, 600.0)),
            },
            y: AxisCalibration {
                label: "Rate".into(),
                min: Some(0.0),
                max: Some(3000.0),
                p1: Some(ImagePoint::new(0.0, 600.0)),
                p2: Some(ImagePoint::new(0.0, 0.0)),
            },
        }
    }

    fn document(axes: AxesConfig) -> DigitizationDocument {
        let mut doc = DigitizationDocument::new();
        *doc.axes_mut() = axes;
        let store = doc.series_mut();
        store.add_series("2000 lb", "#ff0000");
        store.add_point_to_active_series(ImagePoint::new(300.0, 300.0));
        store.add_point_to_active_series(ImagePoint::new(0.0, 600.0));
        store.add_series("empty", "#00ff00");
        doc
    }

    #[test]
    fn projects_every_point_of_every_series() {
        let data = project_all(&document(calibrated()));
        assert_eq!(data.title, "Climb");
        assert_eq!((data.x_label.as_str(), data.y_label.as_str()), ("Temperature", "Rate"));
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.point_count(), 2);

        let first = &data.series[0];
        assert_eq!((first.name.as_str(), first.color.as_str()), ("2000 lb", "#ff0000"));
        assert_eq!(first.points[0].pixel, ImagePoint::new(300.0, 300.0));
        assert_abs_diff_eq!(first.points[0].real.x.unwrap(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.points[0].real.y.unwrap(), 1500.0, epsilon = 1e-9);
        assert_eq!(first.points[1].real, RealCoords { x: Some(-20.0), y: Some(0.0) });
        assert!(data.series[1].points.is_empty());
    }

    #[test]
    fn uncalibrated_axis_yields_none_for_that_axis_only() {
        let mut axes = calibrated();
        axes.axis_mut(Axis::Y).set_max(None);
        let data = project_all(&document(axes));
        for p in &data.series[0].points {
            assert!(p.real.x.is_some());
            assert!(p.real.y.is_none());
        }
    }

    #[test]
    fn series_listing_keeps_click_order() {
        let doc = document(calibrated());
        let series = &doc.series().series()[0];
        let listed = real_points(series, doc.axes());
        let pixels: Vec<_> = listed.iter().map(|p| p.pixel).collect();
        assert_eq!(pixels, series.points);
    }
}
