//! CSV populator for the catalog dataset.

use crate::encoder::RecordEncoder;
use crate::error::CsvPopulatorError;
use catalog_core::SeedConfig;
use catalog_generator::CatalogGenerator;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// How often (in rows) progress is logged at debug level.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes (0 when writing to a stream).
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that writes the dataset to a file or stream.
pub struct CsvPopulator {
    generator: CatalogGenerator,
    include_header: bool,
}

impl CsvPopulator {
    /// Create a new CSV populator.
    ///
    /// Fails if the config is invalid or a name pattern is malformed; nothing
    /// is written in that case.
    pub fn new(config: SeedConfig) -> Result<Self, CsvPopulatorError> {
        Ok(Self {
            generator: CatalogGenerator::new(config)?,
            include_header: true,
        })
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SeedConfig {
        self.generator.config()
    }

    /// Generate the CSV file at `output_path`, replacing any existing file.
    ///
    /// On failure the partially written file is removed.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &self,
        output_path: P,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' with {} rows (seed={})",
            output_path.display(),
            self.config().rows,
            self.config().seed
        );

        let mut metrics = match self.write_file(output_path) {
            Ok(metrics) => metrics,
            Err(e) => {
                match fs::remove_file(output_path) {
                    Ok(()) => debug!("Removed partial CSV '{}'", output_path.display()),
                    Err(remove_err) if remove_err.kind() == io::ErrorKind::NotFound => {}
                    Err(remove_err) => warn!(
                        "Failed to remove partial CSV '{}': {}",
                        output_path.display(),
                        remove_err
                    ),
                }
                return Err(e);
            }
        };

        metrics.file_size_bytes = fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    fn write_file(&self, output_path: &Path) -> Result<PopulateMetrics, CsvPopulatorError> {
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut encoder = RecordEncoder::new(buf_writer);

        let metrics = self.write_all(&mut encoder)?;

        let inner = encoder.into_inner()?;
        inner.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        Ok(metrics)
    }

    /// Stream the dataset into an arbitrary writer (e.g. stdout).
    pub fn populate_writer<W: Write>(&self, writer: W) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut encoder = RecordEncoder::new(writer);

        let mut metrics = self.write_all(&mut encoder)?;
        encoder.flush()?;
        drop(encoder);

        metrics.total_duration = start_time.elapsed();
        debug!(
            "CSV stream complete: {} rows in {:?}",
            metrics.rows_written, metrics.total_duration
        );

        Ok(metrics)
    }

    /// Write the header (if enabled) and every record through `encoder`,
    /// then check the row count against the config.
    fn write_all<W: Write>(
        &self,
        encoder: &mut RecordEncoder<W>,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let mut metrics = PopulateMetrics::default();
        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        if self.include_header {
            let write_start = Instant::now();
            encoder.write_header()?;
            write_time += write_start.elapsed();
        }

        let mut records = self.generator.records();
        loop {
            let gen_start = Instant::now();
            let Some(record) = records.next() else {
                break;
            };
            let record = record?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            encoder.encode(&record)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        let expected = self.config().rows;
        if metrics.rows_written != expected {
            return Err(CsvPopulatorError::RowCountMismatch {
                expected,
                actual: metrics.rows_written,
            });
        }

        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;
        Ok(metrics)
    }
}
