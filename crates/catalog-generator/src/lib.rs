//! Deterministic row generator for the catalog benchmark dataset.
//!
//! This crate provides [`CatalogGenerator`], which turns a [`SeedConfig`]
//! into the `products` dataset. Every record is a pure function of the config
//! and its row index: there is no generator-wide random state, so rows can be
//! produced lazily in order, individually, or in parallel, and always come
//! out identical.
//!
//! # Architecture
//!
//! ```text
//! SeedConfig (YAML)
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │    CatalogGenerator      │
//! │                          │
//! │  - config                │
//! │  - brand picker          │
//! │  - category picker       │
//! │  - injection picker      │
//! └────────────┬─────────────┘
//!              │ record_at(row)
//!              ▼
//!  blake2s("seed:row") ─► ChaCha8 row stream
//!              │
//!              ▼
//!  ProductRecord { id, name, brand, category, description, created_at, updated_at }
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_core::SeedConfig;
//! use catalog_generator::generate;
//!
//! let config = SeedConfig::from_yaml(r#"
//! seed: 42
//! rows: 3
//! timestamps: { base: "2025-01-01T00:00:00Z", step_seconds: 60 }
//! distributions:
//!   brands: { acme: 0.7, globex: 0.3 }
//!   categories: { snacks: 1.0 }
//! token_injection: { common_rate: 0.2, rare_rate: 0.01, fields: { description: 1.0 } }
//! description_tokens: { min: 20, max: 60 }
//! duplicates: { rate: 0.05 }
//! rare_tokens: { prefix: "rare-", start: 1, end: 20000, width: 6 }
//! templates: { name_patterns: ["{adj} {noun} {qualifier}"] }
//! "#).unwrap();
//!
//! for record in generate(config).unwrap() {
//!     let record = record.unwrap();
//!     println!("{} {}", record.id, record.name);
//! }
//! ```
//!
//! # Generators
//!
//! - [`generators::picker`] - weighted categorical sampling
//! - [`generators::rng`] - per-row random stream and identifier
//! - [`generators::name`] - template names and near-duplicates
//! - [`generators::description`] - bounded-length descriptions
//! - [`generators::injection`] - common/rare token injection
//! - [`generators::timestamp`] - `base + row * step`

pub mod generator;
pub mod generators;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use catalog_core::{ProductRecord, SeedConfig};
pub use generator::{generate, CatalogGenerator, GeneratorError, Records};
pub use generators::rng::{derive_row_rng, record_id, RowRng};
pub use generators::vocabulary::VOCABULARY_VERSION;
