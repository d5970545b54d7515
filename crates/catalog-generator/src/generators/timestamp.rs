//! Deterministic row timestamps.

use crate::generator::GeneratorError;
use catalog_core::TimestampConfig;
use chrono::{DateTime, TimeDelta, Utc};

/// `base + row * step_seconds`, or an error if that leaves chrono's range.
pub fn row_timestamp(
    timestamps: &TimestampConfig,
    row: u64,
) -> Result<DateTime<Utc>, GeneratorError> {
    i64::try_from(row)
        .ok()
        .and_then(|row| row.checked_mul(timestamps.step_seconds))
        .and_then(TimeDelta::try_seconds)
        .and_then(|offset| timestamps.base.checked_add_signed(offset))
        .ok_or(GeneratorError::TimestampOverflow { row })
}
