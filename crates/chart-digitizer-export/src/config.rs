use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::ExportIoError;

fn default_decimals() -> usize {
    2
}

fn default_separator() -> char {
    ','
}

fn default_pretty() -> bool {
    true
}

/// CSV writer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Digits after the decimal point for pixel and real columns.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl CsvOptions {
    /// The separator as a single byte. Multi-byte characters, quotes and line
    /// breaks cannot delimit fields.
    pub fn delimiter(&self) -> Result<u8, ExportIoError> {
        match self.separator {
            '"' | '\n' | '\r' => Err(ExportIoError::InvalidSeparator(self.separator)),
            c if c.is_ascii() => Ok(c as u8),
            c => Err(ExportIoError::InvalidSeparator(c)),
        }
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            separator: default_separator(),
        }
    }
}

/// JSON writer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonOptions {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// All export settings, loadable from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    #[serde(default)]
    pub csv: CsvOptions,
    #[serde(default)]
    pub json: JsonOptions,
}

impl ExportOptions {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ExportIoError> {
        let raw = fs::read_to_string(path)?;
        let opts: Self = serde_json::from_str(&raw)?;
        opts.csv.delimiter()?;
        Ok(opts)
    }
}
