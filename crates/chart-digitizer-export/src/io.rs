//! File-level helpers: export writers and document persistence.

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use chart_digitizer_series::DigitizationDocument;
use serde::{Deserialize, Serialize};

use crate::{write_csv, write_json, ExportDataset, ExportIoError, ExportOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExportIoError> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .ok_or_else(|| ExportIoError::UnknownFormat(path.display().to_string()))
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportIoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportIoError::UnknownFormat(s.to_owned())),
        }
    }
}

/// Serialize `data` in the given format.
pub fn write_export<W: Write>(
    data: &ExportDataset,
    format: ExportFormat,
    opts: &ExportOptions,
    out: W,
) -> Result<(), ExportIoError> {
    match format {
        ExportFormat::Json => write_json(data, &opts.json, out),
        ExportFormat::Csv => Ok(write_csv(data, &opts.csv, out)?),
    }
}

pub fn write_export_file(
    path: impl AsRef<Path>,
    data: &ExportDataset,
    format: ExportFormat,
    opts: &ExportOptions,
) -> Result<(), ExportIoError> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_export(data, format, opts, BufWriter::new(file))?;
    log::info!(
        "wrote {} series ({} points) to {}",
        data.series.len(),
        data.point_count(),
        path.display()
    );
    Ok(())
}

/// Write the whole document as pretty JSON.
pub fn save_document(
    path: impl AsRef<Path>,
    doc: &DigitizationDocument,
) -> Result<(), ExportIoError> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a document written by [`save_document`]. Documents in which two
/// series share an id are rejected.
pub fn load_document(path: impl AsRef<Path>) -> Result<DigitizationDocument, ExportIoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
