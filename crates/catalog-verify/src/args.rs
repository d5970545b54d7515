//! CLI argument definitions for the dataset verifier.

use catalog_core::{ConfigError, SeedConfig};
use clap::Args;
use std::path::PathBuf;

/// Arguments for verifying a populated CSV file.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// Path to seed config YAML file (same as used for populate)
    #[arg(long, short = 'c', env = "CATALOG_SEED_CONFIG")]
    pub config: PathBuf,

    /// CSV file to verify
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Seed override (must match the one used during populate)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Row count override (must match the one used during populate)
    #[arg(long)]
    pub row_count: Option<u64>,

    /// The file has no header row
    #[arg(long)]
    pub no_header: bool,

    /// Maximum number of mismatched/missing rows kept in the report
    #[arg(long, default_value = "100")]
    pub max_reported: usize,
}

impl VerifyArgs {
    /// Load the config file and apply the command line overrides.
    pub fn load_config(&self) -> Result<SeedConfig, ConfigError> {
        SeedConfig::from_file(&self.config)?.with_overrides(self.seed, self.row_count)
    }
}
