//! Seed configuration for the catalog dataset.
//!
//! The configuration is loaded from a YAML file and validated once, before any
//! row is generated. Everything downstream (generator, populators, verifier)
//! treats a [`SeedConfig`] as immutable and already validated.
//!
//! ## Layout
//!
//! ```yaml
//! seed: 42
//! rows: 100000
//! timestamps:
//!   base: "2025-01-01T00:00:00Z"
//!   step_seconds: 60
//! distributions:
//!   brands: { acme: 0.6, globex: 0.4 }
//!   categories: { snacks: 1.0 }
//! token_injection:
//!   common_rate: 0.2
//!   rare_rate: 0.01
//!   fields: { name: 0.25, description: 0.75 }
//! description_tokens: { min: 20, max: 60 }
//! duplicates: { rate: 0.05 }
//! rare_tokens: { prefix: "rare-", start: 1, end: 20000, width: 6 }
//! templates:
//!   name_patterns: ["{adj} {noun} {qualifier}"]
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Allowed drift between the sum of a distribution's weights and 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A value is present but outside its allowed domain
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Record field that token injection may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionField {
    Name,
    Description,
    Brand,
    Category,
}

impl InjectionField {
    /// Column name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            InjectionField::Name => "name",
            InjectionField::Description => "description",
            InjectionField::Brand => "brand",
            InjectionField::Category => "category",
        }
    }

    /// Whether injection inserts the token between words (as opposed to
    /// appending it as a suffix).
    pub fn is_free_text(&self) -> bool {
        matches!(self, InjectionField::Name | InjectionField::Description)
    }
}

impl fmt::Display for InjectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic timestamp layout: `created_at = base + row * step_seconds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampConfig {
    /// Instant assigned to row 0
    #[serde(alias = "base_utc", deserialize_with = "deserialize_utc")]
    pub base: DateTime<Utc>,

    /// Seconds between consecutive rows
    pub step_seconds: i64,
}

/// Weighted label distributions for brand and category.
///
/// Map order is significant: it is the order the weighted pickers scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    pub brands: IndexMap<String, f64>,
    pub categories: IndexMap<String, f64>,
}

/// Rates and targets for common/rare token injection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInjectionConfig {
    /// Fraction of rows receiving one common token
    #[serde(alias = "common_row_rate")]
    pub common_rate: f64,

    /// Fraction of rows receiving one rare token
    #[serde(alias = "rare_row_rate")]
    pub rare_rate: f64,

    /// Weight of each field as the injection target
    pub fields: IndexMap<InjectionField, f64>,
}

/// Inclusive bounds on the number of description tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionTokensConfig {
    pub min: usize,
    pub max: usize,
}

/// Near-duplicate name settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuplicateConfig {
    /// Fraction of rows (index > 0) whose name is derived from an earlier row
    #[serde(alias = "near_duplicate_row_rate")]
    pub rate: f64,
}

/// Rare token format: `<prefix><number zero-padded to width>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RareTokenConfig {
    pub prefix: String,
    pub start: u64,
    pub end: u64,
    pub width: usize,
}

impl RareTokenConfig {
    /// Render the rare token for `number`.
    pub fn format_token(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }
}

/// Product name templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub name_patterns: Vec<String>,
}

// ============================================================================
// SeedConfig
// ============================================================================

/// Complete, immutable description of one dataset.
///
/// Two runs with equal `SeedConfig` values produce byte-identical datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed controlling every random draw in the dataset
    pub seed: i64,

    /// Number of records to generate
    pub rows: u64,

    pub timestamps: TimestampConfig,
    pub distributions: DistributionConfig,
    pub token_injection: TokenInjectionConfig,
    pub description_tokens: DescriptionTokensConfig,
    pub duplicates: DuplicateConfig,
    pub rare_tokens: RareTokenConfig,
    pub templates: TemplateConfig,
}

impl SeedConfig {
    /// Load and validate a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SeedConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the seed and/or row count, then revalidate.
    pub fn with_overrides(mut self, seed: Option<i64>, rows: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(rows) = rows {
            self.rows = rows;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check every constraint the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::invalid("rows", "must be > 0"));
        }
        if self.timestamps.step_seconds <= 0 {
            return Err(ConfigError::invalid("timestamps.step_seconds", "must be > 0"));
        }

        validate_distribution(&self.distributions.brands, "distributions.brands")?;
        validate_distribution(&self.distributions.categories, "distributions.categories")?;

        let injection = &self.token_injection;
        validate_rate(injection.common_rate, "token_injection.common_rate")?;
        validate_rate(injection.rare_rate, "token_injection.rare_rate")?;
        validate_weights(
            injection.fields.values().copied(),
            injection.fields.len(),
            "token_injection.fields",
        )?;

        let desc = self.description_tokens;
        if desc.min == 0 || desc.max == 0 {
            return Err(ConfigError::invalid("description_tokens", "min/max must be > 0"));
        }
        if desc.min > desc.max {
            return Err(ConfigError::invalid(
                "description_tokens",
                format!("min ({}) must be <= max ({})", desc.min, desc.max),
            ));
        }

        validate_rate(self.duplicates.rate, "duplicates.rate")?;

        let rare = &self.rare_tokens;
        if rare.prefix.trim().is_empty() {
            return Err(ConfigError::invalid("rare_tokens.prefix", "must be non-empty"));
        }
        if rare.start == 0 || rare.end == 0 {
            return Err(ConfigError::invalid("rare_tokens", "start/end must be > 0"));
        }
        if rare.start > rare.end {
            return Err(ConfigError::invalid(
                "rare_tokens",
                format!("start ({}) must be <= end ({})", rare.start, rare.end),
            ));
        }
        if rare.width == 0 {
            return Err(ConfigError::invalid("rare_tokens.width", "must be > 0"));
        }

        let patterns = &self.templates.name_patterns;
        if patterns.is_empty() {
            return Err(ConfigError::invalid(
                "templates.name_patterns",
                "must have at least 1 pattern",
            ));
        }
        if let Some(idx) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::invalid(
                format!("templates.name_patterns[{idx}]"),
                "must be a non-empty string",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

fn validate_rate(rate: f64, field: &str) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::invalid(
            field,
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(())
}

fn validate_distribution(map: &IndexMap<String, f64>, field: &str) -> Result<(), ConfigError> {
    if let Some(label) = map.keys().find(|k| k.trim().is_empty()) {
        return Err(ConfigError::invalid(
            field,
            format!("labels must be non-empty strings (got {label:?})"),
        ));
    }
    validate_weights(map.values().copied(), map.len(), field)
}

fn validate_weights(
    weights: impl Iterator<Item = f64>,
    len: usize,
    field: &str,
) -> Result<(), ConfigError> {
    if len == 0 {
        return Err(ConfigError::invalid(field, "must be non-empty"));
    }
    let mut total = 0.0;
    for weight in weights {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::invalid(
                field,
                format!("weights must be finite and >= 0 (got {weight})"),
            ));
        }
        total += weight;
    }
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::invalid(
            field,
            format!("weights must sum to 1.0 (got {total})"),
        ));
    }
    Ok(())
}

/// Parse a UTC instant.
///
/// Accepts RFC 3339 (any offset, normalized to UTC), a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` treated as UTC, or a bare `YYYY-MM-DD`.
pub fn parse_utc_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("expected an ISO-8601 datetime, got {raw:?}"))
    })
}

// ============================================================================
// Tests
// ============================================================================
