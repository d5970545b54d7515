//! Validate command runner.

use anyhow::Context;
use catalog_core::{format_timestamp, SeedConfig};
use catalog_generator::{CatalogGenerator, VOCABULARY_VERSION};
use std::io::Write;

use crate::ValidateArgs;

/// Load the config, build the generator (which checks every name pattern)
/// and print a summary
pub fn run_validate<W: Write>(args: &ValidateArgs, out: &mut W) -> anyhow::Result<()> {
    let config = SeedConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load seed config from {:?}", args.config))?;
    CatalogGenerator::new(config.clone()).context("Failed to build generator")?;

    out.write_all(summarize(&config).as_bytes())?;
    out.flush()?;
    tracing::info!("Config {:?} is valid", args.config);
    Ok(())
}

/// Human-readable summary of a validated config.
pub fn summarize(config: &SeedConfig) -> String {
    let brands = join_labels(config.distributions.brands.keys().map(String::as_str));
    let categories = join_labels(config.distributions.categories.keys().map(String::as_str));
    let fields = join_labels(config.token_injection.fields.keys().map(|f| f.as_str()));

    format!(
        "seed: {}\n\
         rows: {}\n\
         timestamps: base {} step {}s\n\
         brands: {}\n\
         categories: {}\n\
         token injection: common {} rare {} into [{}]\n\
         description tokens: {}..={}\n\
         near-duplicate rate: {}\n\
         rare tokens: {}..{}\n\
         name patterns: {}\n\
         vocabulary version: {}\n",
        config.seed,
        config.rows,
        format_timestamp(&config.timestamps.base),
        config.timestamps.step_seconds,
        brands,
        categories,
        config.token_injection.common_rate,
        config.token_injection.rare_rate,
        fields,
        config.description_tokens.min,
        config.description_tokens.max,
        config.duplicates.rate,
        config.rare_tokens.format_token(config.rare_tokens.start),
        config.rare_tokens.format_token(config.rare_tokens.end),
        config.templates.name_patterns.len(),
        VOCABULARY_VERSION,
    )
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let config = SeedConfig::from_yaml(
            r#"
seed: 7
rows: 1000
timestamps: { base: "2025-01-01", step_seconds: 60 }
distributions:
  brands: { acme: 0.5, globex: 0.5 }
  categories: { snacks: 1.0 }
token_injection: { common_rate: 0.2, rare_rate: 0.01, fields: { name: 0.5, description: 0.5 } }
description_tokens: { min: 20, max: 60 }
duplicates: { rate: 0.05 }
rare_tokens: { prefix: "rare-", start: 1, end: 20000, width: 6 }
templates: { name_patterns: ["{adj} {noun}", "{brandish} {noun} {qualifier}"] }
"#,
        )
        .unwrap();

        let summary = summarize(&config);
        assert!(summary.contains("seed: 7\n"));
        assert!(summary.contains("rows: 1000\n"));
        assert!(summary.contains("timestamps: base 2025-01-01T00:00:00+00:00 step 60s\n"));
        assert!(summary.contains("brands: acme, globex\n"));
        assert!(summary.contains("into [name, description]\n"));
        assert!(summary.contains("rare tokens: rare-000001..rare-020000\n"));
        assert!(summary.contains("name patterns: 2\n"));
    }
}
