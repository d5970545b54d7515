//! Command line parsing and handlers.

use crate::{BAD_PATTERN_CONFIG, SEED_CONFIG};
use catalog_bench::commands::{run_populate, run_validate, run_verify};
use catalog_bench::{Cli, Commands, PopulateTarget, ValidateArgs, VerifyTarget};
use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;

fn populate_target(args: &[&str]) -> PopulateTarget {
    match Cli::parse_from(args).command {
        Commands::Populate { target } => target,
        _ => panic!("expected populate command"),
    }
}

fn verify_target(args: &[&str]) -> VerifyTarget {
    match Cli::parse_from(args).command {
        Commands::Verify { target } => target,
        _ => panic!("expected verify command"),
    }
}

#[test]
fn test_parse_populate_csv() {
    let PopulateTarget::Csv { args } = populate_target(&[
        "catalog-bench",
        "populate",
        "csv",
        "--config",
        SEED_CONFIG,
        "--output",
        "out.csv",
        "--row-count",
        "1000",
        "--no-header",
    ]);
    assert_eq!(args.output, PathBuf::from("out.csv"));
    assert_eq!(args.common.row_count, Some(1000));
    assert!(args.no_header);
    assert!(!args.common.dry_run);
}

#[test]
fn test_parse_preview_defaults() {
    match Cli::parse_from(["catalog-bench", "preview", "--config", SEED_CONFIG]).command {
        Commands::Preview { args } => {
            assert_eq!(args.start, 0);
            assert_eq!(args.limit, 10);
        }
        _ => panic!("expected preview command"),
    }
}

#[test]
fn test_populate_and_verify_commands() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("products.csv");
    let output = output.to_str().unwrap();

    run_populate(populate_target(&[
        "catalog-bench",
        "populate",
        "csv",
        "-c",
        SEED_CONFIG,
        "-o",
        output,
        "--row-count",
        "120",
    ]))
    .unwrap();

    run_verify(verify_target(&[
        "catalog-bench",
        "verify",
        "csv",
        "-c",
        SEED_CONFIG,
        "-i",
        output,
        "--row-count",
        "120",
    ]))
    .unwrap();

    // Same file, different dataset size.
    let result = run_verify(verify_target(&[
        "catalog-bench",
        "verify",
        "csv",
        "-c",
        SEED_CONFIG,
        "-i",
        output,
        "--row-count",
        "100",
    ]));
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("20 extra"), "{message}");
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("products.csv");

    run_populate(populate_target(&[
        "catalog-bench",
        "populate",
        "csv",
        "-c",
        SEED_CONFIG,
        "-o",
        output.to_str().unwrap(),
        "--dry-run",
    ]))
    .unwrap();

    assert!(!output.exists());
}

#[test]
fn test_validate_command() {
    let mut out = Vec::new();
    run_validate(
        &ValidateArgs {
            config: PathBuf::from(SEED_CONFIG),
        },
        &mut out,
    )
    .unwrap();
    let summary = String::from_utf8(out).unwrap();
    assert!(summary.contains("rows: 500"));

    let err = run_validate(
        &ValidateArgs {
            config: PathBuf::from(BAD_PATTERN_CONFIG),
        },
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("{color}"));
}

#[test]
fn test_missing_config_file() {
    let err = run_validate(
        &ValidateArgs {
            config: PathBuf::from("tests/fixtures/does-not-exist.yaml"),
        },
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load seed config"));
}
