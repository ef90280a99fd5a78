//! Error types for the seasonkit-seasonal crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the seasonkit-seasonal crate.
///
/// Degenerate statistics (too few rows, zero denominators) are not errors;
/// they surface as `None` fields on [`crate::SeasonalSummary`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeasonalError {
    /// Returned when date and value columns differ in length.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the same date appears more than once in a series.
    #[error("duplicate date in series: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },

    /// Returned when a value is infinite.
    #[error("non-finite value at {date}")]
    NonFiniteInput {
        /// Date of the offending observation.
        date: NaiveDate,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] seasonkit_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let e = SeasonalError::LengthMismatch {
            field: "values",
            expected: 10,
            got: 9,
        };
        assert_eq!(e.to_string(), "values: expected 10 elements, got 9");
    }

    #[test]
    fn display_duplicate_date() {
        let e = SeasonalError::DuplicateDate {
            date: NaiveDate::from_ymd_opt(2023, 1, 22).unwrap(),
        };
        assert_eq!(e.to_string(), "duplicate date in series: 2023-01-22");
    }

    #[test]
    fn display_non_finite() {
        let e = SeasonalError::NonFiniteInput {
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        };
        assert_eq!(e.to_string(), "non-finite value at 2024-02-29");
    }

    #[test]
    fn display_invalid_config() {
        let e = SeasonalError::InvalidConfig {
            reason: "bad".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn from_calendar_error() {
        let ce = seasonkit_calendar::CalendarError::InvalidWindow { lo: 1, hi: 0 };
        let se: SeasonalError = ce.into();
        assert!(matches!(se, SeasonalError::Calendar(_)));
        assert_eq!(se.to_string(), "invalid offset window: lo (1) must be <= hi (0)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeasonalError>();
    }
}
