//! Row assembler and the public generation entry points.

use crate::generators::description::describe;
use crate::generators::injection::{inject, TokenKind};
use crate::generators::name::{base_name, check_pattern, final_name};
use crate::generators::picker::WeightedPicker;
use crate::generators::rng::{derive_row_rng, record_id};
use crate::generators::timestamp::row_timestamp;
use catalog_core::{ConfigError, InjectionField, ProductRecord, SeedConfig};
use std::borrow::Borrow;

/// Error type for generator operations.
///
/// Every variant is fatal: a run that hits one must be abandoned, because a
/// partially generated dataset is not comparable with any other run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Picker or pattern list inputs that validation should have rejected
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Config failed validation
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Name pattern still contains a brace after substitution
    #[error("Unknown template placeholder in name pattern: {pattern}")]
    Template { pattern: String },

    /// `base + row * step` is not representable
    #[error("Timestamp out of range for row {row}")]
    TimestampOverflow { row: u64 },
}

/// Deterministic generator for the `products` dataset.
///
/// Holds the validated config and the three read-only pickers (brand,
/// category, injection field). Every record is a pure function of the config
/// and its row index, so `record_at` may be called for any row, in any
/// order, from any number of threads.
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    config: SeedConfig,
    brands: WeightedPicker<String>,
    categories: WeightedPicker<String>,
    injection_fields: WeightedPicker<InjectionField>,
}

impl CatalogGenerator {
    /// Validate `config` and build the shared pickers.
    ///
    /// Every name pattern is checked here, so a malformed pattern fails the
    /// run before the first row rather than at whichever row first draws it.
    pub fn new(config: SeedConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        for pattern in &config.templates.name_patterns {
            check_pattern(pattern)?;
        }

        let brands = WeightedPicker::from_pairs(
            config
                .distributions
                .brands
                .iter()
                .map(|(label, weight)| (label.clone(), *weight)),
        )?;
        let categories = WeightedPicker::from_pairs(
            config
                .distributions
                .categories
                .iter()
                .map(|(label, weight)| (label.clone(), *weight)),
        )?;
        let injection_fields = WeightedPicker::from_pairs(
            config
                .token_injection
                .fields
                .iter()
                .map(|(field, weight)| (*field, *weight)),
        )?;

        Ok(Self {
            config,
            brands,
            categories,
            injection_fields,
        })
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Number of records in the dataset.
    pub fn row_count(&self) -> u64 {
        self.config.rows
    }

    /// Build the record for `row`.
    ///
    /// Steps, in order:
    /// 1. identifier (own digest, no draws)
    /// 2. row stream
    /// 3. `created_at = base + row * step`, `updated_at = created_at`
    /// 4. brand, then category
    /// 5. base name, then final (possibly near-duplicate) name
    /// 6. description
    /// 7. common token injection, then rare token injection
    pub fn record_at(&self, row: u64) -> Result<ProductRecord, GeneratorError> {
        let config = &self.config;

        let id = record_id(config.seed, row);
        let mut rng = derive_row_rng(config.seed, row);

        let created_at = row_timestamp(&config.timestamps, row)?;

        let brand = self.brands.pick(&mut rng).clone();
        let category = self.categories.pick(&mut rng).clone();

        let base = base_name(config, row)?;
        let name = final_name(config, row, base, &mut rng)?;

        let description = describe(config, &mut rng);

        let mut record = ProductRecord {
            id,
            name,
            brand,
            category,
            description,
            created_at,
            updated_at: created_at,
        };

        for kind in [TokenKind::Common, TokenKind::Rare] {
            inject(&mut record, kind, config, &self.injection_fields, &mut rng);
        }

        Ok(record)
    }

    /// Lazily generate every record, row 0 first.
    pub fn records(&self) -> Records<&Self> {
        Records::new(self, 0, self.config.rows)
    }

    /// Lazily generate rows `start..config.rows`.
    ///
    /// Rows before `start` are skipped without being computed.
    pub fn records_from(&self, start: u64) -> Records<&Self> {
        Records::new(self, start.min(self.config.rows), self.config.rows)
    }

    /// Consume the generator into an owning record iterator.
    pub fn into_records(self) -> Records<Self> {
        let rows = self.config.rows;
        Records::new(self, 0, rows)
    }
}

/// Generate the full dataset described by `config`.
///
/// Yields exactly `config.rows` items. Calling it again with an equal config
/// reproduces the same sequence.
pub fn generate(config: SeedConfig) -> Result<Records<CatalogGenerator>, GeneratorError> {
    Ok(CatalogGenerator::new(config)?.into_records())
}

/// Iterator that lazily generates records.
///
/// Works over a borrowed or an owned [`CatalogGenerator`]. After the first
/// error it yields nothing more.
#[derive(Debug)]
pub struct Records<G> {
    generator: G,
    next: u64,
    end: u64,
}

impl<G: Borrow<CatalogGenerator>> Records<G> {
    fn new(generator: G, next: u64, end: u64) -> Self {
        Self {
            generator,
            next,
            end,
        }
    }
}

impl<G: Borrow<CatalogGenerator>> Iterator for Records<G> {
    type Item = Result<ProductRecord, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let row = self.next;
        let result = self.generator.borrow().record_at(row);
        self.next = if result.is_ok() { row + 1 } else { self.end };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<G: Borrow<CatalogGenerator>> ExactSizeIterator for Records<G> {}
