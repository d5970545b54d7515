//! Catalog dataset integration tests.
//!
//! These tests drive the populate -> verify workflow and the CLI handlers
//! against the YAML fixtures in `tests/fixtures/`. Each test:
//! 1. Loads a fixture config (optionally with seed/row overrides)
//! 2. Writes the dataset into a temp directory
//! 3. Regenerates the same rows and checks the output against them

mod cli;
mod csv_roundtrip;
mod preview;

pub const SEED_CONFIG: &str = "tests/fixtures/seed.yaml";
pub const LEGACY_SEED_CONFIG: &str = "tests/fixtures/seed_legacy_keys.yaml";
pub const BAD_PATTERN_CONFIG: &str = "tests/fixtures/seed_bad_pattern.yaml";
