/// Failures while reading or writing files.
#[derive(thiserror::Error, Debug)]
pub enum ExportIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error("cannot infer export format from {0:?}, expected .json or .csv")]
    UnknownFormat(String),
    #[error("CSV separator {0:?} must be an ASCII character other than a quote or line break")]
    InvalidSeparator(char),
}
