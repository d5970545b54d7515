//! Streaming verifier for populated catalog datasets.
//!
//! This crate checks that a CSV file written by a populator holds exactly
//! the records the generator produces for the same config and seed. Expected
//! rows are regenerated one at a time, so memory use does not grow with the
//! dataset.
//!
//! # Example
//!
//! ```ignore
//! use catalog_verify::CsvVerifier;
//! use catalog_core::SeedConfig;
//!
//! let config = SeedConfig::from_file("seed.yaml")?;
//! let verifier = CsvVerifier::new(config)?;
//!
//! let report = verifier.verify_file("products.csv")?;
//! assert!(report.is_success());
//! ```

pub mod args;
pub mod compare;
pub mod error;
pub mod report;
pub mod verifier;

pub use args::VerifyArgs;
pub use compare::{compare_record, compare_text, compare_timestamp, CompareResult};
pub use error::VerifyError;
pub use report::{FieldMismatch, MismatchInfo, MissingInfo, VerificationReport};
pub use verifier::CsvVerifier;
