//! Streaming verifier for populated CSV files.

use crate::compare::compare_record;
use crate::error::VerifyError;
use crate::report::{MismatchInfo, MissingInfo, VerificationReport};
use catalog_core::{SeedConfig, PRODUCT_COLUMNS};
use catalog_generator::CatalogGenerator;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default cap on detailed mismatch/missing entries kept in a report.
pub const DEFAULT_MAX_REPORTED: usize = 100;

const PROGRESS_INTERVAL: u64 = 10_000;

/// Verifies a CSV file against the records regenerated from the config.
///
/// Rows are read and regenerated one at a time; row `i` of the file is
/// compared with `record_at(i)`.
pub struct CsvVerifier {
    generator: CatalogGenerator,
    has_header: bool,
    max_reported: usize,
}

impl CsvVerifier {
    /// Create a verifier. Fails on an invalid config.
    pub fn new(config: SeedConfig) -> Result<Self, VerifyError> {
        Ok(Self {
            generator: CatalogGenerator::new(config)?,
            has_header: true,
            max_reported: DEFAULT_MAX_REPORTED,
        })
    }

    /// Set whether the file starts with a header row.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Limit the detailed entries kept in the report.
    pub fn with_max_reported(mut self, max_reported: usize) -> Self {
        self.max_reported = max_reported;
        self
    }

    pub fn config(&self) -> &SeedConfig {
        self.generator.config()
    }

    /// Verify the CSV file at `path`.
    pub fn verify_file<P: AsRef<Path>>(&self, path: P) -> Result<VerificationReport, VerifyError> {
        let path = path.as_ref();
        info!(
            "Verifying '{}' against {} rows (seed={})",
            path.display(),
            self.config().rows,
            self.config().seed
        );
        let file = File::open(path)?;
        self.verify_reader(BufReader::new(file))
    }

    /// Verify CSV data from any reader.
    pub fn verify_reader<R: Read>(&self, reader: R) -> Result<VerificationReport, VerifyError> {
        let start_time = Instant::now();
        let mut generation_time = Duration::ZERO;
        let mut compare_time = Duration::ZERO;

        // Rows with the wrong column count are reported, not fatal.
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut row = StringRecord::new();

        if self.has_header {
            if !csv_reader.read_record(&mut row)? {
                row.clear();
            }
            check_header(&row)?;
        }

        let mut report = VerificationReport {
            expected: self.generator.row_count(),
            ..Default::default()
        };

        for index in 0..report.expected {
            let gen_start = Instant::now();
            let expected = self.generator.record_at(index)?;
            generation_time += gen_start.elapsed();

            if !csv_reader.read_record(&mut row)? {
                report.missing = report.expected - index;
                for missing_index in index..report.expected {
                    if report.missing_rows.len() >= self.max_reported {
                        break;
                    }
                    report.missing_rows.push(MissingInfo {
                        expected_id: catalog_generator::record_id(self.config().seed, missing_index),
                        index: missing_index,
                    });
                }
                warn!(
                    "File ended after {} rows; {} expected rows missing",
                    index, report.missing
                );
                break;
            }
            report.found += 1;

            let compare_start = Instant::now();
            let field_mismatches = compare_record(&expected, &row);
            compare_time += compare_start.elapsed();

            if field_mismatches.is_empty() {
                report.matched += 1;
            } else {
                report.mismatched += 1;
                debug!(
                    "Row {} ({}) differs in {} field(s)",
                    index,
                    expected.id,
                    field_mismatches.len()
                );
                if report.mismatched_rows.len() < self.max_reported {
                    report.mismatched_rows.push(MismatchInfo {
                        record_id: expected.id,
                        index,
                        field_mismatches,
                    });
                }
            }

            if report.found % PROGRESS_INTERVAL == 0 {
                debug!(
                    "Progress: {} rows verified, {} matched, {} mismatched",
                    report.found, report.matched, report.mismatched
                );
            }
        }

        while csv_reader.read_record(&mut row)? {
            report.extra += 1;
        }
        if report.extra > 0 {
            warn!("File has {} rows past the expected row count", report.extra);
        }

        report.generation_duration = generation_time;
        report.compare_duration = compare_time;
        report.total_duration = start_time.elapsed();

        info!(
            "Verification complete: {} expected, {} found, {} matched, {} mismatched, {} missing, {} extra in {:?}",
            report.expected,
            report.found,
            report.matched,
            report.mismatched,
            report.missing,
            report.extra,
            report.total_duration
        );

        Ok(report)
    }
}

fn check_header(row: &StringRecord) -> Result<(), VerifyError> {
    if row.iter().eq(PRODUCT_COLUMNS) {
        return Ok(());
    }
    Err(VerifyError::HeaderMismatch {
        expected: PRODUCT_COLUMNS.join(","),
        actual: row.iter().collect::<Vec<_>>().join(","),
    })
}
