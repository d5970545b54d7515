//! Shared fixtures for unit tests.

use catalog_core::SeedConfig;

pub(crate) const TEST_CONFIG_YAML: &str = r#"
seed: 42
rows: 200
timestamps:
  base: "2025-01-01T00:00:00Z"
  step_seconds: 60
distributions:
  brands:
    acme: 0.5
    globex: 0.3
    initech: 0.2
  categories:
    snacks: 0.6
    beverages: 0.3
    pantry: 0.1
token_injection:
  common_rate: 0.2
  rare_rate: 0.05
  fields:
    name: 0.25
    description: 0.55
    brand: 0.1
    category: 0.1
description_tokens:
  min: 20
  max: 60
duplicates:
  rate: 0.1
rare_tokens:
  prefix: "rare-"
  start: 1
  end: 20000
  width: 6
templates:
  name_patterns:
    - "{adj} {noun} {qualifier}"
    - "{brandish} {adj} {noun}"
    - "{noun} - {qualifier}"
"#;

pub(crate) fn test_config() -> SeedConfig {
    SeedConfig::from_yaml(TEST_CONFIG_YAML).unwrap()
}
