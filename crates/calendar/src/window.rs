//! Inclusive day-offset windows around an anchor date.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::sequence::{date_sequence, day_offset, shift};

/// An inclusive range of signed day offsets `[lo, hi]`.
///
/// Only `lo <= hi` is required; the window does not have to straddle the
/// anchor (a window of `[5, 20]` covers days strictly after it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetWindow {
    lo: i64,
    hi: i64,
}

impl OffsetWindow {
    /// Creates a window covering offsets `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] if `lo > hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self, CalendarError> {
        if lo > hi {
            return Err(CalendarError::InvalidWindow { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Returns the lower bound (inclusive).
    pub fn lo(self) -> i64 {
        self.lo
    }

    /// Returns the upper bound (inclusive).
    pub fn hi(self) -> i64 {
        self.hi
    }

    /// Returns the number of offsets in the window, saturating at
    /// `u64::MAX` for the full `i64` range.
    pub fn n_offsets(self) -> u64 {
        self.hi.abs_diff(self.lo).saturating_add(1)
    }

    /// Returns `true` if `offset` lies inside the window.
    pub fn contains(self, offset: i64) -> bool {
        (self.lo..=self.hi).contains(&offset)
    }

    /// Returns the offsets as an inclusive range.
    pub fn offsets(self) -> RangeInclusive<i64> {
        self.lo..=self.hi
    }

    /// Expands the window around `anchor` into `(date, offset)` pairs.
    ///
    /// Dates run contiguously from `anchor + lo` to `anchor + hi` and each
    /// offset is exactly `date - anchor` in days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if either end of the window
    /// falls outside the representable date range.
    pub fn dates_around(self, anchor: NaiveDate) -> Result<Vec<(NaiveDate, i64)>, CalendarError> {
        let start = shift(anchor, self.lo)?;
        let end = shift(anchor, self.hi)?;
        let n_days = day_offset(end, start) as usize + 1;
        let dates = date_sequence(start, n_days)?;
        Ok(dates.into_iter().zip(self.offsets()).collect())
    }
}

impl Default for OffsetWindow {
    /// Ten weeks either side of the anchor.
    fn default() -> Self {
        Self { lo: -70, hi: 70 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let w = OffsetWindow::new(-7, 7).unwrap();
        assert_eq!(w.lo(), -7);
        assert_eq!(w.hi(), 7);
        assert_eq!(w.n_offsets(), 15);
    }

    #[test]
    fn single_offset_window() {
        let w = OffsetWindow::new(3, 3).unwrap();
        assert_eq!(w.n_offsets(), 1);
        assert!(w.contains(3));
        assert!(!w.contains(2));
    }

    #[test]
    fn new_rejects_inverted() {
        assert_eq!(
            OffsetWindow::new(1, 0).unwrap_err(),
            CalendarError::InvalidWindow { lo: 1, hi: 0 }
        );
    }

    #[test]
    fn window_need_not_contain_zero() {
        let w = OffsetWindow::new(5, 20).unwrap();
        assert!(!w.contains(0));
        assert_eq!(w.n_offsets(), 16);
    }

    #[test]
    fn default_is_seventy_days() {
        let w = OffsetWindow::default();
        assert_eq!((w.lo(), w.hi()), (-70, 70));
        assert_eq!(w.n_offsets(), 141);
    }

    #[test]
    fn dates_around_2023() {
        let anchor = ymd(2023, 1, 22);
        let w = OffsetWindow::new(-7, 7).unwrap();
        let pairs = w.dates_around(anchor).unwrap();
        assert_eq!(pairs.len(), 15);
        assert_eq!(pairs[0], (ymd(2023, 1, 15), -7));
        assert_eq!(pairs[7], (anchor, 0));
        assert_eq!(pairs[14], (ymd(2023, 1, 29), 7));
        for (date, offset) in pairs {
            assert_eq!(day_offset(date, anchor), offset);
        }
    }

    #[test]
    fn dates_around_crosses_leap_day() {
        let anchor = ymd(2024, 2, 10);
        let w = OffsetWindow::new(0, 20).unwrap();
        let pairs = w.dates_around(anchor).unwrap();
        assert!(pairs.iter().any(|&(d, _)| d == ymd(2024, 2, 29)));
        assert_eq!(pairs.last().unwrap().0, ymd(2024, 3, 1));
    }

    #[test]
    fn dates_around_out_of_range() {
        let w = OffsetWindow::new(0, 1).unwrap();
        assert!(matches!(
            w.dates_around(NaiveDate::MAX),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn full_i64_range_saturates() {
        let w = OffsetWindow::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(w.n_offsets(), u64::MAX);
        assert!(matches!(
            w.dates_around(NaiveDate::from_ymd_opt(2023, 1, 22).unwrap()),
            Err(CalendarError::DateOutOfRange { days: i64::MIN, .. })
        ));
    }

    #[test]
    fn dates_around_huge_window_fails_before_expanding() {
        let w = OffsetWindow::new(-1_000_000_000_000, 1_000_000_000_000).unwrap();
        assert!(matches!(
            w.dates_around(ymd(2023, 1, 22)),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }
}
