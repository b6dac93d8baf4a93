use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chart_digitizer::core::{Axis, AxisCalibration};
use chart_digitizer::export::{
    load_document, project_all, write_export, write_export_file, ExportFormat, ExportIoError,
    ExportOptions,
};
use chart_digitizer::query::{query_y, QueryError};
use chart_digitizer::series::{DigitizationDocument, Series, SeriesId};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "chart-digitizer",
    version,
    about = "Inspect, export and query digitized chart documents"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize the calibration and series of a document.
    Info {
        /// Document JSON written by the digitizer.
        document: PathBuf,
    },
    /// Write the real-world dataset as JSON or CSV.
    Export {
        document: PathBuf,
        /// Output format; inferred from `--output` when omitted, JSON otherwise.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON file with export options (CSV precision/separator, JSON layout).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Interpolate the Y value of one series at a real X value.
    Query {
        document: PathBuf,
        /// Series name or id.
        #[arg(short, long)]
        series: String,
        /// Real-world X value.
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,
        /// Digits printed after the decimal point.
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Export(#[from] ExportIoError),
    #[error("{path}: {source}")]
    Document {
        path: String,
        #[source]
        source: ExportIoError,
    },
    #[error("no series named or identified by {0:?}")]
    UnknownSeries(String),
    #[error(transparent)]
    Stdout(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr so query and export output on stdout stays clean.
/// `RUST_LOG` overrides the `-v` level.
#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity(verbose))
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Same levels, routed through a `tracing` subscriber that also reports the
/// duration of instrumented queries and projections.
#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::{fmt, EnvFilter};

    let level = verbosity(verbose);
    let _ = tracing_log::LogTracer::builder()
        .with_max_level(level)
        .init();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(fmt::time::Uptime::default())
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Info { document } => {
            let doc = open(&document)?;
            print_info(&doc, io::stdout().lock())?;
        }
        Command::Export {
            document,
            format,
            output,
            config,
        } => {
            let doc = open(&document)?;
            let opts = match config {
                Some(path) => ExportOptions::load_json(path)?,
                None => ExportOptions::default(),
            };
            let data = project_all(&doc);
            match output {
                Some(path) => {
                    let format = match format {
                        Some(f) => f.into(),
                        None => ExportFormat::from_path(&path)?,
                    };
                    write_export_file(&path, &data, format, &opts)?;
                }
                None => {
                    let format = format.map(Into::into).unwrap_or(ExportFormat::Json);
                    write_export(&data, format, &opts, io::stdout().lock())?;
                }
            }
        }
        Command::Query {
            document,
            series,
            x,
            decimals,
        } => {
            let doc = open(&document)?;
            let target = find_series(&doc, &series)
                .ok_or_else(|| CliError::UnknownSeries(series.clone()))?;
            let mut out = io::stdout().lock();
            match query_y(target, doc.axes(), x) {
                Ok(y) => writeln!(out, "{y:.decimals$}")?,
                Err(QueryError::OutOfBounds { .. }) => writeln!(out, "out of bounds")?,
                Err(err) => {
                    log::info!("{err}");
                    writeln!(out, "undefined")?
                }
            }
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<DigitizationDocument, CliError> {
    load_document(path).map_err(|source| CliError::Document {
        path: path.display().to_string(),
        source,
    })
}

/// Match by id first, then by name.
fn find_series<'a>(doc: &'a DigitizationDocument, key: &str) -> Option<&'a Series> {
    let store = doc.series();
    store
        .get(&SeriesId::new(key))
        .or_else(|| store.find_by_name(key))
}

fn print_info<W: Write>(doc: &DigitizationDocument, mut out: W) -> io::Result<()> {
    let axes = doc.axes();
    writeln!(out, "title: {}", axes.title)?;
    match doc.image() {
        Some(img) => writeln!(
            out,
            "image: {}x{}{}",
            img.width,
            img.height,
            img.source
                .as_deref()
                .map(|s| format!(" ({s})"))
                .unwrap_or_default()
        )?,
        None => writeln!(out, "image: none")?,
    }
    for axis in Axis::ALL {
        writeln!(out, "{axis} axis: {}", describe_axis(axes.axis(axis)))?;
    }
    let store = doc.series();
    writeln!(out, "series: {}", store.len())?;
    for s in store.series() {
        let marker = if store.active_series_id() == Some(&s.id) {
            "*"
        } else {
            " "
        };
        writeln!(
            out,
            "{marker} {} {:?} {} ({} points)",
            s.id,
            s.name,
            s.color,
            s.len()
        )?;
    }
    Ok(())
}

fn describe_axis(axis: &AxisCalibration) -> String {
    let label = if axis.label.is_empty() {
        String::new()
    } else {
        format!("{:?} ", axis.label)
    };
    match axis.line() {
        Ok(line) => format!("{label}[{} .. {}]", line.min(), line.max()),
        Err(err) => format!("{label}undefined ({err})"),
    }
}
