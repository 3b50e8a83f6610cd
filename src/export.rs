//! Dataset export.
//!
//! Three layouts are supported:
//!
//! - `jsonl` - one file per entity kind (`users.jsonl`, `transactions.jsonl`,
//!   `alerts.jsonl`), one entity per line
//! - `json` - a single pretty-printed `dataset.json` document
//! - `yaml` - a single `dataset.yaml` document

use crate::scenario::Dataset;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON Lines, one entity per line
    Jsonl,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of entities written.
    pub rows_written: u64,
    /// Files created, in write order.
    pub files: Vec<PathBuf>,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Incremental writer for one entity kind.
///
/// Entities are encoded as they arrive, so a large batch never has to be
/// held in memory. JSONL emits one line per entity; JSON and YAML emit one
/// array document that is closed by [`EntityWriter::finish`].
pub struct EntityWriter<W: Write> {
    writer: W,
    format: ExportFormat,
    rows_written: u64,
}

impl<W: Write> EntityWriter<W> {
    pub fn new(writer: W, format: ExportFormat) -> Self {
        Self {
            writer,
            format,
            rows_written: 0,
        }
    }

    /// Encode one entity.
    pub fn write<T: Serialize>(&mut self, entity: &T) -> Result<(), ExportError> {
        match self.format {
            ExportFormat::Jsonl => {
                serde_json::to_writer(&mut self.writer, entity)?;
                writeln!(self.writer)?;
            }
            ExportFormat::Json => {
                let separator = if self.rows_written == 0 { "[\n" } else { ",\n" };
                self.writer.write_all(separator.as_bytes())?;
                serde_json::to_writer_pretty(&mut self.writer, entity)?;
            }
            // A run of single-item sequences is one YAML sequence.
            ExportFormat::Yaml => {
                serde_yaml::to_writer(&mut self.writer, std::slice::from_ref(entity))?
            }
        }

        self.rows_written += 1;
        if self.rows_written % 10000 == 0 {
            debug!("Written {} rows", self.rows_written);
        }
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Close the document, flush, and return the number of entities written.
    pub fn finish(mut self) -> Result<u64, ExportError> {
        match (self.format, self.rows_written) {
            (ExportFormat::Jsonl, _) => {}
            (ExportFormat::Json | ExportFormat::Yaml, 0) => writeln!(self.writer, "[]")?,
            (ExportFormat::Json, _) => writeln!(self.writer, "\n]")?,
            (ExportFormat::Yaml, _) => {}
        }
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}

/// Write a slice of entities to `writer` in one go.
///
/// Returns the number of entities written.
pub fn write_entities<T: Serialize, W: Write>(
    writer: W,
    entities: &[T],
    format: ExportFormat,
) -> Result<u64, ExportError> {
    let mut out = EntityWriter::new(writer, format);
    for entity in entities {
        out.write(entity)?;
    }
    out.finish()
}

/// Write a dataset into `output_dir`, creating the directory if needed.
pub fn export_dataset<P: AsRef<Path>>(
    dataset: &Dataset,
    output_dir: P,
    format: ExportFormat,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    info!(
        "Exporting {} entities to '{}' as {:?}",
        dataset.len(),
        output_dir.display(),
        format
    );

    let mut metrics = ExportMetrics::default();
    match format {
        ExportFormat::Jsonl => {
            write_jsonl_file(output_dir, "users", &dataset.users, &mut metrics)?;
            write_jsonl_file(output_dir, "transactions", &dataset.transactions, &mut metrics)?;
            write_jsonl_file(output_dir, "alerts", &dataset.alerts, &mut metrics)?;
        }
        ExportFormat::Json | ExportFormat::Yaml => {
            let path = output_dir.join(format!("dataset.{}", format.extension()));
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::create(&path)?);
            match format {
                ExportFormat::Json => {
                    serde_json::to_writer_pretty(&mut writer, dataset)?;
                    writeln!(writer)?;
                }
                _ => serde_yaml::to_writer(&mut writer, dataset)?,
            }
            writer.flush()?;

            metrics.rows_written = dataset.len() as u64;
            metrics.files.push(path);
        }
    }

    metrics.total_duration = start_time.elapsed();
    info!(
        "Export complete: {} rows in {} files in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.files.len(),
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

fn write_jsonl_file<T: Serialize>(
    output_dir: &Path,
    stem: &str,
    entities: &[T],
    metrics: &mut ExportMetrics,
) -> Result<(), ExportError> {
    let path = output_dir.join(format!("{stem}.jsonl"));
    let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::create(&path)?);

    let rows = write_entities(writer, entities, ExportFormat::Jsonl)?;

    debug!("Wrote {} rows to '{}'", rows, path.display());
    metrics.rows_written += rows;
    metrics.files.push(path);
    Ok(())
}
