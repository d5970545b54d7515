//! Verification report types.

use serde::Serialize;
use std::time::Duration;

/// One field that differs from the regenerated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

/// A row present in the file whose content differs.
#[derive(Debug, Clone, Serialize)]
pub struct MismatchInfo {
    pub record_id: String,
    pub index: u64,
    pub field_mismatches: Vec<FieldMismatch>,
}

/// A row the generator produces but the file ends before.
#[derive(Debug, Clone, Serialize)]
pub struct MissingInfo {
    pub expected_id: String,
    pub index: u64,
}

/// Outcome of verifying one file.
///
/// `mismatched_rows` and `missing_rows` are capped; the counters are not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    /// Rows the config says the dataset has.
    pub expected: u64,
    /// Expected rows that were present in the file.
    pub found: u64,
    pub matched: u64,
    pub mismatched: u64,
    pub missing: u64,
    /// Rows in the file past the expected row count.
    pub extra: u64,
    pub mismatched_rows: Vec<MismatchInfo>,
    pub missing_rows: Vec<MissingInfo>,
    pub total_duration: Duration,
    pub generation_duration: Duration,
    pub compare_duration: Duration,
}

impl VerificationReport {
    /// True when every expected row matched and nothing extra was found.
    pub fn is_success(&self) -> bool {
        self.matched == self.expected
            && self.mismatched == 0
            && self.missing == 0
            && self.extra == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let report = VerificationReport {
            expected: 10,
            found: 10,
            matched: 10,
            ..Default::default()
        };
        assert!(report.is_success());

        let report = VerificationReport {
            expected: 10,
            found: 10,
            matched: 10,
            extra: 1,
            ..Default::default()
        };
        assert!(!report.is_success());

        let report = VerificationReport {
            expected: 10,
            found: 9,
            matched: 9,
            missing: 1,
            ..Default::default()
        };
        assert!(!report.is_success());
    }
}
