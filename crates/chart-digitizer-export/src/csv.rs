//! Flat CSV rendering: one row per point.

use std::io::Write;

use crate::{CsvOptions, ExportDataset, ExportIoError};

const COLUMNS: [&str; 6] = ["Series", "Color", "Pixel X", "Pixel Y", "Real X", "Real Y"];

/// Write the header and one record per point. Fields that contain the
/// separator, a quote or a line break are quoted.
pub fn write_csv<W: Write>(
    data: &ExportDataset,
    opts: &CsvOptions,
    out: W,
) -> Result<(), ExportIoError> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(opts.delimiter()?)
        .from_writer(out);
    writer.write_record(COLUMNS)?;

    let num = |v: f64| format!("{:.*}", opts.decimals, v);
    let maybe = |v: Option<f64>| v.map(num).unwrap_or_default();

    for series in &data.series {
        for p in &series.points {
            writer.write_record([
                series.name.as_str(),
                series.color.as_str(),
                num(p.pixel.x).as_str(),
                num(p.pixel.y).as_str(),
                maybe(p.real.x).as_str(),
                maybe(p.real.y).as_str(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_string(
    data: &ExportDataset,
    opts: &CsvOptions,
) -> Result<String, ExportIoError> {
    let mut buf = Vec::new();
    write_csv(data, opts, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
