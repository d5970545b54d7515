//! Error types for the verifier.

use catalog_core::ConfigError;
use catalog_generator::GeneratorError;
use thiserror::Error;

/// Errors that stop verification before a report can be produced.
///
/// Data differences are not errors; they are recorded in the report.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (including rows with the wrong number of columns).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config could not be loaded or failed validation.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The header row does not list the expected columns in order.
    #[error("Header mismatch: expected [{expected}], found [{actual}]")]
    HeaderMismatch { expected: String, actual: String },
}
