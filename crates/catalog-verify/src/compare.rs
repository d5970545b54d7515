//! Field comparison between regenerated records and loaded rows.

use crate::report::FieldMismatch;
use catalog_core::{format_timestamp, parse_utc_timestamp, ProductRecord, PRODUCT_COLUMNS};
use chrono::{DateTime, Utc};
use csv::StringRecord;

/// Result of comparing one expected value with the loaded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareResult {
    /// Values match.
    Match,
    /// Values don't match.
    Mismatch { expected: String, actual: String },
    /// Loaded value is missing.
    Missing,
}

impl CompareResult {
    pub fn is_match(&self) -> bool {
        matches!(self, CompareResult::Match)
    }
}

/// Compare a text field byte for byte.
pub fn compare_text(expected: &str, actual: Option<&str>) -> CompareResult {
    match actual {
        None => CompareResult::Missing,
        Some(actual) if actual == expected => CompareResult::Match,
        Some(actual) => CompareResult::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        },
    }
}

/// Compare a timestamp as an instant, so `Z` and `+00:00` renderings match.
pub fn compare_timestamp(expected: &DateTime<Utc>, actual: Option<&str>) -> CompareResult {
    let Some(actual) = actual else {
        return CompareResult::Missing;
    };
    match parse_utc_timestamp(actual) {
        Some(parsed) if parsed == *expected => CompareResult::Match,
        _ => CompareResult::Mismatch {
            expected: format_timestamp(expected),
            actual: actual.to_string(),
        },
    }
}

/// Compare every column of `row` against `expected`.
///
/// Returns the fields that differ, in column order, followed by one
/// `<extra columns>` entry if the row is longer than [`PRODUCT_COLUMNS`]. An
/// empty result means the row matches.
pub fn compare_record(expected: &ProductRecord, row: &StringRecord) -> Vec<FieldMismatch> {
    let results = [
        compare_text(&expected.id, row.get(0)),
        compare_text(&expected.name, row.get(1)),
        compare_text(&expected.brand, row.get(2)),
        compare_text(&expected.category, row.get(3)),
        compare_text(&expected.description, row.get(4)),
        compare_timestamp(&expected.created_at, row.get(5)),
        compare_timestamp(&expected.updated_at, row.get(6)),
    ];

    let mut mismatches: Vec<FieldMismatch> = results
        .into_iter()
        .zip(PRODUCT_COLUMNS)
        .filter_map(|(result, field)| match result {
            CompareResult::Match => None,
            CompareResult::Mismatch { expected, actual } => Some(FieldMismatch {
                field: field.to_string(),
                expected,
                actual,
            }),
            CompareResult::Missing => Some(FieldMismatch {
                field: field.to_string(),
                expected: String::new(),
                actual: "<missing>".to_string(),
            }),
        })
        .collect();

    if row.len() > PRODUCT_COLUMNS.len() {
        mismatches.push(FieldMismatch {
            field: "<extra columns>".to_string(),
            expected: String::new(),
            actual: row
                .iter()
                .skip(PRODUCT_COLUMNS.len())
                .collect::<Vec<_>>()
                .join(","),
        });
    }

    mismatches
}
