//! Command-line interface for catalog-bench
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the dataset as CSV
//! catalog-bench populate csv \
//!   --config seed.yaml \
//!   --output products.csv
//!
//! # Same dataset, different size
//! catalog-bench populate csv \
//!   --config seed.yaml \
//!   --row-count 1000000 \
//!   --output products_1m.csv
//!
//! # Verify a populated file
//! catalog-bench verify csv \
//!   --config seed.yaml \
//!   --input products.csv
//! ```
//!
//! Set `RUST_LOG=info` (or `debug` for per-10k-row progress) to see logs.

use catalog_bench::commands::{run_populate, run_preview, run_validate, run_verify};
use catalog_bench::{Cli, Commands};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { target } => run_populate(target),
        Commands::Verify { target } => run_verify(target),
        Commands::Preview { args } => run_preview(&args, &mut std::io::stdout().lock()),
        Commands::Validate { args } => run_validate(&args, &mut std::io::stdout().lock()),
    }
}
