//! Core types for the catalog benchmark dataset.
//!
//! This crate provides the types shared by the generator, the populators and
//! the verifier:
//!
//! - [`SeedConfig`] - Dataset configuration loaded from YAML
//! - [`ProductRecord`] - One generated row
//! - [`PRODUCT_COLUMNS`] - Column order used by every loader
//!
//! # Architecture
//!
//! ```text
//! catalog-core (this crate)
//!    │
//!    ├─── catalog-generator     (deterministic row engine)
//!    │
//!    ├─── catalog-populate-csv  (streams records into CSV files)
//!    └─── catalog-verify        (checks CSV files against regenerated rows)
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_core::SeedConfig;
//!
//! let config = SeedConfig::from_yaml(r#"
//! seed: 42
//! rows: 10
//! timestamps: { base: "2025-01-01T00:00:00Z", step_seconds: 60 }
//! distributions:
//!   brands: { acme: 1.0 }
//!   categories: { snacks: 1.0 }
//! token_injection: { common_rate: 0.1, rare_rate: 0.01, fields: { name: 1.0 } }
//! description_tokens: { min: 5, max: 10 }
//! duplicates: { rate: 0.0 }
//! rare_tokens: { prefix: "rare-", start: 1, end: 100, width: 3 }
//! templates: { name_patterns: ["{adj} {noun}"] }
//! "#).unwrap();
//!
//! assert_eq!(config.rows, 10);
//! ```

pub mod config;
pub mod record;

// Re-exports for convenience
pub use config::{
    parse_utc_timestamp, ConfigError, DescriptionTokensConfig, DistributionConfig,
    DuplicateConfig, InjectionField, RareTokenConfig, SeedConfig, TemplateConfig,
    TimestampConfig, TokenInjectionConfig,
};
pub use record::{format_timestamp, ProductRecord, PRODUCT_COLUMNS, TIMESTAMP_FORMAT};
