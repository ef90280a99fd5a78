//! Error types for the seasonkit-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the seasonkit-calendar crate.
///
/// Covers unknown calendar mode names, malformed offset windows and date
/// arithmetic that leaves the range chrono can represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calendar mode name is not recognised.
    #[error("unsupported calendar: {name:?} (expected \"gregorian\" or \"lunar\")")]
    UnsupportedCalendar {
        /// The name that was provided.
        name: String,
    },

    /// Returned when an offset window has `lo > hi`.
    #[error("invalid offset window: lo ({lo}) must be <= hi ({hi})")]
    InvalidWindow {
        /// Lower bound (inclusive).
        lo: i64,
        /// Upper bound (inclusive).
        hi: i64,
    },

    /// Returned when a year/month/day triple is not a real date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Month (1..=12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Returned when shifting a date by a number of days overflows.
    #[error("date out of range: {date} shifted by {days} days")]
    DateOutOfRange {
        /// The starting date.
        date: NaiveDate,
        /// The requested shift in days.
        days: i64,
    },
}
