//! Tabular output for generated records.
//!
//! Columns follow [`PatientVisitRecord::COLUMNS`]. Missing values are empty
//! CSV fields or JSON `null`; dates are `YYYY-MM-DD`.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use cbs_model::PatientVisitRecord;
use tracing::info;

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str =
    "Simulated_Clinical_and_Billing_Data_for_Healthcare_Analytics.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    JsonLines,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::JsonLines => "jsonl",
        }
    }

    /// Pick a format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::JsonLines),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Sink for a finished record sequence.
pub trait TabularWriter {
    /// Write every record in order and return the number of rows written.
    fn write_records(&mut self, records: &[PatientVisitRecord]) -> Result<usize>;
}

/// CSV with a header row.
pub struct CsvRecordWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvRecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(inner),
            header_written: false,
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|error| anyhow::anyhow!("flush csv writer: {}", error.error()))
    }
}

impl<W: Write> TabularWriter for CsvRecordWriter<W> {
    fn write_records(&mut self, records: &[PatientVisitRecord]) -> Result<usize> {
        if !self.header_written {
            self.writer
                .write_record(PatientVisitRecord::COLUMNS)
                .context("write csv header")?;
            self.header_written = true;
        }
        for record in records {
            self.writer
                .serialize(record)
                .with_context(|| format!("write csv row {}", record.appointment_id))?;
        }
        self.writer.flush().context("flush csv writer")?;
        Ok(records.len())
    }
}

/// One JSON object per line.
pub struct JsonLinesRecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesRecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TabularWriter for JsonLinesRecordWriter<W> {
    fn write_records(&mut self, records: &[PatientVisitRecord]) -> Result<usize> {
        for record in records {
            serde_json::to_writer(&mut self.writer, record)
                .with_context(|| format!("write json row {}", record.appointment_id))?;
            self.writer.write_all(b"\n").context("write json newline")?;
        }
        self.writer.flush().context("flush json writer")?;
        Ok(records.len())
    }
}

/// Render records as CSV text.
pub fn render_csv(records: &[PatientVisitRecord]) -> Result<String> {
    let mut writer = CsvRecordWriter::new(Vec::new());
    writer.write_records(records)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

/// Write records to `path`, creating parent directories as needed.
pub fn write_dataset(
    path: &Path,
    format: OutputFormat,
    records: &[PatientVisitRecord],
) -> Result<usize> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let buffered = BufWriter::new(file);
    let rows = match format {
        OutputFormat::Csv => CsvRecordWriter::new(buffered).write_records(records),
        OutputFormat::JsonLines => JsonLinesRecordWriter::new(buffered).write_records(records),
    }
    .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), format = %format, rows, "dataset written");
    Ok(rows)
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
