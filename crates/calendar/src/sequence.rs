//! Contiguous date sequences and day offsets.

use chrono::{Days, NaiveDate};

use crate::error::CalendarError;

/// Shifts `date` by a signed number of days.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the result is not
/// representable.
pub(crate) fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(CalendarError::DateOutOfRange { date, days })
}

/// Signed number of days from `anchor` to `date`.
///
/// Negative before the anchor, zero on it, positive after it.
pub fn day_offset(date: NaiveDate, anchor: NaiveDate) -> i64 {
    date.signed_duration_since(anchor).num_days()
}

/// Generates `n_days` consecutive dates starting at `start`.
///
/// Month, year and leap-day boundaries follow the proleptic Gregorian
/// calendar.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the sequence runs past the
/// last representable date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use seasonkit_calendar::date_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let dates = date_sequence(start, 4).unwrap();
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn date_sequence(start: NaiveDate, n_days: usize) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return Ok(dates);
    }
    dates.push(start);
    let mut current = start;
    for i in 1..n_days {
        current = current.succ_opt().ok_or(CalendarError::DateOutOfRange {
            date: start,
            days: i as i64,
        })?;
        dates.push(current);
    }
    Ok(dates)
}
