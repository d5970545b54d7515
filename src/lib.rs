//! catalog-bench library
//!
//! Command definitions and handlers for the `catalog-bench` binary. The
//! dataset itself is produced by the workspace crates:
//!
//! - `catalog_core` - config and record types
//! - `catalog_generator` - deterministic row engine
//! - `catalog_populate_csv` - CSV populator
//! - `catalog_verify` - CSV verifier
//!
//! # CLI Usage
//!
//! ```bash
//! # Write 100k rows to a CSV file
//! catalog-bench populate csv --config seed.yaml --output products.csv --row-count 100000
//!
//! # Check a file against the regenerated rows
//! catalog-bench verify csv --config seed.yaml --input products.csv --row-count 100000
//!
//! # Print rows 500..505 as JSON lines
//! catalog-bench preview --config seed.yaml --start 500 --limit 5
//!
//! # Validate a config file
//! catalog-bench validate --config seed.yaml
//! ```

use catalog_populate_csv::CsvPopulateArgs;
use catalog_verify::VerifyArgs;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "catalog-bench")]
#[command(about = "Deterministic catalog dataset generator for database benchmarks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the dataset to a loader target
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },

    /// Verify loaded data matches the regenerated dataset
    Verify {
        #[command(subcommand)]
        target: VerifyTarget,
    },

    /// Print a range of records as JSON lines
    Preview {
        #[command(flatten)]
        args: PreviewArgs,
    },

    /// Load and validate a seed config
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Target to populate with the dataset
#[derive(Subcommand)]
pub enum PopulateTarget {
    /// Generate a CSV file
    #[command(name = "csv")]
    Csv {
        #[command(flatten)]
        args: CsvPopulateArgs,
    },
}

/// Target to verify against the dataset
#[derive(Subcommand)]
pub enum VerifyTarget {
    /// Verify a CSV file
    #[command(name = "csv")]
    Csv {
        #[command(flatten)]
        args: VerifyArgs,
    },
}

/// Arguments for `preview`.
#[derive(Args, Clone, Debug)]
pub struct PreviewArgs {
    /// Path to seed config YAML file
    #[arg(long, short = 'c', env = "CATALOG_SEED_CONFIG")]
    pub config: PathBuf,

    /// Override the random seed
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Override the number of rows in the dataset
    #[arg(long)]
    pub row_count: Option<u64>,

    /// First row index to print
    #[arg(long, default_value = "0")]
    pub start: u64,

    /// Maximum number of rows to print
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: u64,
}

/// Arguments for `validate`.
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Path to seed config YAML file
    #[arg(long, short = 'c', env = "CATALOG_SEED_CONFIG")]
    pub config: PathBuf,
}
