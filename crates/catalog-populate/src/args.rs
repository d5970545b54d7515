//! Common CLI argument definitions shared by all populators.

use catalog_core::{ConfigError, SeedConfig};
use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators and the verifier.
///
/// `--seed` and `--row-count` override the values in the config file; the
/// overridden config is revalidated.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to seed config YAML file
    #[arg(long, short = 'c', env = "CATALOG_SEED_CONFIG")]
    pub config: PathBuf,

    /// Override the number of rows to generate
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Override the random seed (same seed = same data)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Dry-run mode: validate configuration without writing any output
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Load the config file and apply the command line overrides.
    pub fn load_config(&self) -> Result<SeedConfig, ConfigError> {
        SeedConfig::from_file(&self.config)?.with_overrides(self.seed, self.row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonPopulateArgs,
    }

    #[test]
    fn test_parse_defaults() {
        let cli = TestCli::parse_from(["test", "--config", "seed.yaml"]);
        assert_eq!(cli.common.config, PathBuf::from("seed.yaml"));
        assert_eq!(cli.common.row_count, None);
        assert_eq!(cli.common.seed, None);
        assert!(!cli.common.dry_run);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = TestCli::parse_from([
            "test",
            "-c",
            "seed.yaml",
            "--row-count",
            "500",
            "--seed",
            "7",
            "--dry-run",
        ]);
        assert_eq!(cli.common.row_count, Some(500));
        assert_eq!(cli.common.seed, Some(7));
        assert!(cli.common.dry_run);
    }

    #[test]
    fn test_parse_negative_seed() {
        let cli = TestCli::parse_from(["test", "-c", "seed.yaml", "--seed", "-5"]);
        assert_eq!(cli.common.seed, Some(-5));
    }
}
