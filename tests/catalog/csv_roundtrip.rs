//! CSV populate -> verify round trip.

use crate::{BAD_PATTERN_CONFIG, LEGACY_SEED_CONFIG, SEED_CONFIG};
use catalog_core::SeedConfig;
use catalog_generator::GeneratorError;
use catalog_populate_csv::{CsvPopulator, CsvPopulatorError};
use catalog_verify::CsvVerifier;
use tempfile::TempDir;

fn load(seed: Option<i64>, rows: Option<u64>) -> SeedConfig {
    SeedConfig::from_file(SEED_CONFIG)
        .unwrap()
        .with_overrides(seed, rows)
        .unwrap()
}

#[test]
fn test_populate_then_verify() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.csv");

    let metrics = CsvPopulator::new(load(None, None))
        .unwrap()
        .populate(&path)
        .unwrap();
    assert_eq!(metrics.rows_written, 500);

    let report = CsvVerifier::new(load(None, None))
        .unwrap()
        .verify_file(&path)
        .unwrap();
    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.matched, 500);
}

#[test]
fn test_verify_with_other_seed_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.csv");
    CsvPopulator::new(load(None, Some(50)))
        .unwrap()
        .populate(&path)
        .unwrap();

    let report = CsvVerifier::new(load(Some(43), Some(50)))
        .unwrap()
        .verify_file(&path)
        .unwrap();
    assert!(!report.is_success());
    assert_eq!(report.mismatched, 50);
}

#[test]
fn test_larger_dataset_extends_smaller_one() {
    // Row content does not depend on the row count.
    let mut small = Vec::new();
    CsvPopulator::new(load(None, Some(100)))
        .unwrap()
        .populate_writer(&mut small)
        .unwrap();

    let mut large = Vec::new();
    CsvPopulator::new(load(None, Some(300)))
        .unwrap()
        .populate_writer(&mut large)
        .unwrap();

    assert!(large.starts_with(&small));
    assert!(large.len() > small.len());
}

#[test]
fn test_legacy_keys_produce_same_file() {
    let legacy = SeedConfig::from_file(LEGACY_SEED_CONFIG).unwrap();
    assert_eq!(legacy, load(None, None));

    let mut current = Vec::new();
    CsvPopulator::new(load(None, Some(40)))
        .unwrap()
        .populate_writer(&mut current)
        .unwrap();

    let mut older = Vec::new();
    CsvPopulator::new(legacy.with_overrides(None, Some(40)).unwrap())
        .unwrap()
        .populate_writer(&mut older)
        .unwrap();

    assert_eq!(current, older);
}

#[test]
fn test_timestamps_follow_step() {
    let mut out = Vec::new();
    CsvPopulator::new(load(None, Some(3)))
        .unwrap()
        .populate_writer(&mut out)
        .unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(&rows[0][5], "2025-01-01T00:00:00+00:00");
    assert_eq!(&rows[2][5], "2025-01-01T00:02:00+00:00");
    assert_eq!(&rows[2][6], &rows[2][5]);
}

#[test]
fn test_bad_pattern_rejected_before_writing() {
    let config = SeedConfig::from_file(BAD_PATTERN_CONFIG).unwrap();
    let err = CsvPopulator::new(config).err().unwrap();
    assert!(matches!(
        err,
        CsvPopulatorError::Generator(GeneratorError::Template { .. })
    ));
}
