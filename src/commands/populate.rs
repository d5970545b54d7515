//! Populate command runner.

use anyhow::Context;
use catalog_populate_csv::{CsvPopulator, DEFAULT_BUFFER_SIZE};
use std::io::BufWriter;

use crate::PopulateTarget;

/// Run populate command to write the deterministic dataset to a target
pub fn run_populate(target: PopulateTarget) -> anyhow::Result<()> {
    match target {
        PopulateTarget::Csv { args } => {
            let config = args.common.load_config().with_context(|| {
                format!("Failed to load seed config from {:?}", args.common.config)
            })?;
            let rows = config.rows;
            let seed = config.seed;

            let populator = CsvPopulator::new(config)
                .context("Failed to build generator")?
                .with_header(!args.no_header);

            if args.common.dry_run {
                tracing::info!(
                    "[DRY-RUN] Would generate {} rows (seed={}) into {:?}",
                    rows,
                    seed,
                    args.output
                );
                tracing::info!("[DRY-RUN] Header row: {}", !args.no_header);
                tracing::info!("[DRY-RUN] Config validated successfully");
                return Ok(());
            }

            let metrics = if args.is_stdout() {
                let stdout = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, std::io::stdout().lock());
                populator
                    .populate_writer(stdout)
                    .context("Failed to write CSV to stdout")?
            } else {
                populator
                    .populate(&args.output)
                    .with_context(|| format!("Failed to generate CSV {:?}", args.output))?
            };

            tracing::info!(
                "Generated {:?}: {} rows in {:?} ({:.2} rows/sec)",
                args.output,
                metrics.rows_written,
                metrics.total_duration,
                metrics.rows_per_second()
            );
        }
    }

    Ok(())
}
