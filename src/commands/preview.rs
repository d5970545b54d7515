//! Preview command runner.

use anyhow::Context;
use catalog_core::SeedConfig;
use catalog_generator::CatalogGenerator;
use std::io::Write;

use crate::PreviewArgs;

/// Print records `start..start + limit` as JSON lines
pub fn run_preview<W: Write>(args: &PreviewArgs, out: &mut W) -> anyhow::Result<()> {
    let config = SeedConfig::from_file(&args.config)
        .and_then(|config| config.with_overrides(args.seed, args.row_count))
        .with_context(|| format!("Failed to load seed config from {:?}", args.config))?;
    let generator = CatalogGenerator::new(config).context("Failed to build generator")?;

    let written = write_preview(&generator, args.start, args.limit, out)?;
    tracing::debug!("Previewed {} rows starting at row {}", written, args.start);
    Ok(())
}

/// Write up to `limit` records starting at row `start`, one JSON object per
/// line. Returns the number of records written.
pub fn write_preview<W: Write>(
    generator: &CatalogGenerator,
    start: u64,
    limit: u64,
    out: &mut W,
) -> anyhow::Result<u64> {
    let mut written = 0;
    for record in generator.records_from(start) {
        if written >= limit {
            break;
        }
        let record = record.context("Failed to generate record")?;
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
