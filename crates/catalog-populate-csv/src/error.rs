//! Error types for the CSV populator.

use catalog_core::ConfigError;
use catalog_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur during CSV population.
#[derive(Error, Debug)]
pub enum CsvPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config could not be loaded or failed validation.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The number of rows written differs from the configured row count.
    #[error("Row count mismatch: expected={expected} actual={actual}")]
    RowCountMismatch { expected: u64, actual: u64 },
}
