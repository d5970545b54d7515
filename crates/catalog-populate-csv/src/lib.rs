//! CSV file populator for the catalog dataset.
//!
//! This crate streams records from the catalog-generator crate into a CSV
//! file laid out in [`catalog_core::PRODUCT_COLUMNS`] order, ready for a
//! bulk `COPY ... FROM ... WITH (FORMAT csv)`.
//!
//! # Example
//!
//! ```ignore
//! use catalog_populate_csv::CsvPopulator;
//! use catalog_core::SeedConfig;
//!
//! let config = SeedConfig::from_file("path/to/seed.yaml")?;
//! let populator = CsvPopulator::new(config)?;
//!
//! let metrics = populator.populate("/path/to/products.csv")?;
//! ```

pub mod args;
mod encoder;
mod error;
mod populator;

pub use args::{CommonPopulateArgs, CsvPopulateArgs};
pub use encoder::RecordEncoder;
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
