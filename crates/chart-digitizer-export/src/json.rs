use std::io::Write;

use crate::{ExportDataset, ExportIoError, JsonOptions};

pub fn write_json<W: Write>(
    data: &ExportDataset,
    opts: &JsonOptions,
    mut out: W,
) -> Result<(), ExportIoError> {
    if opts.pretty {
        serde_json::to_writer_pretty(&mut out, data)?;
    } else {
        serde_json::to_writer(&mut out, data)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn to_json_string(
    data: &ExportDataset,
    opts: &JsonOptions,
) -> Result<String, ExportIoError> {
    let mut buf = Vec::new();
    write_json(data, opts, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExportSeries, ProjectedPoint, RealCoords};
    use chart_digitizer_core::ImagePoint;
    use serde_json::{json, Value};

    #[test]
    fn uses_plotting_script_keys_and_nulls() {
        let data = ExportDataset {
            title: "Landing".into(),
            x_label: "OAT".into(),
            y_label: "Distance".into(),
            series: vec![ExportSeries {
                name: "dry".into(),
                color: "#000000".into(),
                points: vec![ProjectedPoint {
                    pixel: ImagePoint::new(1.5, 2.0),
                    real: RealCoords { x: Some(3.0), y: None },
                }],
            }],
        };
        let text = to_json_string(&data, &JsonOptions { pretty: false }).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Landing",
                "xAxisLabel": "OAT",
                "yAxisLabel": "Distance",
                "series": [{
                    "name": "dry",
                    "color": "#000000",
                    "points": [{ "pixel": { "x": 1.5, "y": 2.0 }, "real": { "x": 3.0, "y": null } }]
                }]
            })
        );
        assert_eq!(text.lines().count(), 1);

        let back: ExportDataset = serde_json::from_str(&text).unwrap();
        assert_eq!(back, data);
    }
}
