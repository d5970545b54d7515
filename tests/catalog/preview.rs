//! Preview output.

use crate::SEED_CONFIG;
use catalog_bench::commands::preview::write_preview;
use catalog_bench::commands::run_preview;
use catalog_bench::PreviewArgs;
use catalog_core::SeedConfig;
use catalog_generator::CatalogGenerator;
use std::path::PathBuf;

fn generator() -> CatalogGenerator {
    CatalogGenerator::new(SeedConfig::from_file(SEED_CONFIG).unwrap()).unwrap()
}

#[test]
fn test_preview_json_lines() {
    let generator = generator();
    let mut out = Vec::new();
    let written = write_preview(&generator, 10, 5, &mut out).unwrap();
    assert_eq!(written, 5);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);

    for (offset, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let expected = generator.record_at(10 + offset as u64).unwrap();
        assert_eq!(value["id"], expected.id.as_str());
        assert_eq!(value["name"], expected.name.as_str());
        assert_eq!(value["description"], expected.description.as_str());
    }
}

#[test]
fn test_preview_stops_at_row_count() {
    let generator = generator();
    let mut out = Vec::new();
    let written = write_preview(&generator, 498, 10, &mut out).unwrap();
    assert_eq!(written, 2);

    let written = write_preview(&generator, 10_000, 10, &mut Vec::new()).unwrap();
    assert_eq!(written, 0);
}

#[test]
fn test_run_preview_applies_overrides() {
    let args = PreviewArgs {
        config: PathBuf::from(SEED_CONFIG),
        seed: Some(7),
        row_count: None,
        start: 0,
        limit: 1,
    };
    let mut out = Vec::new();
    run_preview(&args, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(out.trim_ascii_end()).unwrap();
    assert_eq!(value["id"], catalog_generator::record_id(7, 0).as_str());
}
