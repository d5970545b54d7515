//! Verify command runner.

use anyhow::Context;
use catalog_verify::{CsvVerifier, VerificationReport};

use crate::VerifyTarget;

/// Run verify command against a populated target
pub fn run_verify(target: VerifyTarget) -> anyhow::Result<()> {
    match target {
        VerifyTarget::Csv { args } => {
            let config = args
                .load_config()
                .with_context(|| format!("Failed to load seed config from {:?}", args.config))?;

            let verifier = CsvVerifier::new(config)
                .context("Failed to build generator")?
                .with_header(!args.no_header)
                .with_max_reported(args.max_reported);

            let report = verifier
                .verify_file(&args.input)
                .with_context(|| format!("Failed to verify {:?}", args.input))?;

            log_report(&report);

            if report.is_success() {
                tracing::info!(
                    "Verification completed successfully - {} rows match expected data",
                    report.matched
                );
                Ok(())
            } else {
                Err(anyhow::anyhow!(
                    "Verification failed - {} mismatched, {} missing, {} extra rows",
                    report.mismatched,
                    report.missing,
                    report.extra
                ))
            }
        }
    }
}

fn log_report(report: &VerificationReport) {
    for row in &report.mismatched_rows {
        for field in &row.field_mismatches {
            tracing::error!(
                "Row {} ({}): {} expected {:?}, found {:?}",
                row.index,
                row.record_id,
                field.field,
                field.expected,
                field.actual
            );
        }
    }
    if let Some(first) = report.missing_rows.first() {
        tracing::error!(
            "{} rows missing, starting at row {} ({})",
            report.missing,
            first.index,
            first.expected_id
        );
    }
    let shown = report.mismatched_rows.len() as u64;
    if report.mismatched > shown {
        tracing::error!("... and {} more mismatched rows", report.mismatched - shown);
    }
}
