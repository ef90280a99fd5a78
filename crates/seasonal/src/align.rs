//! Alignment of a daily series onto day offsets around each year's anchor.
//!
//! The pipeline runs in three explicit phases so each rule can be checked on
//! its own:
//!
//! 1. [`offset_grid`]: one empty row per (year, offset) for every input year
//!    that has an anchor.
//! 2. [`fill_from_series`]: exact-date lookup into the whole input series.
//! 3. Bounded interpolation over the merged, date-sorted rows via
//!    [`seasonkit_stats::interpolate_inside`].

use seasonkit_calendar::{AnchorTable, OffsetWindow};
use seasonkit_stats::interpolate_inside;
use tracing::{debug, warn};

use crate::aligned::{AlignedPoint, AlignedTable};
use crate::config::UnmappedYearPolicy;
use crate::error::SeasonalError;
use crate::series::Series;

/// Aligns `series` onto the offset window around each year's anchor date.
///
/// A year qualifies when it appears among the input dates and in `anchors`.
/// For each qualifying year every date in `[anchor + lo, anchor + hi]` gets a
/// row, filled from the input by exact date (rows from neighbouring years are
/// eligible). Missing values are then interpolated linearly between known
/// neighbours of the merged date-sorted sequence; values before the first or
/// after the last known one stay `None`.
///
/// Years without an anchor are dropped according to `policy` and reported in
/// [`AlignedTable::skipped_years`]. Empty input, or input with no qualifying
/// year, gives an empty table.
///
/// # Errors
///
/// Returns [`SeasonalError::Calendar`] if a window end is not a
/// representable date.
#[tracing::instrument(skip(series, anchors), fields(n_points = series.len()))]
pub fn align(
    series: &Series,
    anchors: &AnchorTable,
    window: OffsetWindow,
    policy: UnmappedYearPolicy,
) -> Result<AlignedTable, SeasonalError> {
    let (mut rows, skipped) = offset_grid(&series.years(), anchors, window, policy)?;
    let matched = fill_from_series(&mut rows, series);

    rows.sort_by_key(|r| (r.date, r.year));

    let mut values: Vec<Option<f64>> = rows.iter().map(|r| r.value).collect();
    let filled = interpolate_inside(&mut values);
    for (row, value) in rows.iter_mut().zip(values) {
        row.value = value;
    }

    debug!(
        n_rows = rows.len(),
        matched,
        filled,
        n_skipped = skipped.len(),
        "alignment complete"
    );
    Ok(AlignedTable::new(rows, window, skipped))
}

/// Phase 1: empty rows for every (qualifying year, offset) pair.
///
/// Returns the rows in year order and the years dropped for lack of an
/// anchor.
pub(crate) fn offset_grid(
    years: &[i32],
    anchors: &AnchorTable,
    window: OffsetWindow,
    policy: UnmappedYearPolicy,
) -> Result<(Vec<AlignedPoint>, Vec<i32>), SeasonalError> {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for &year in years {
        let Some(anchor) = anchors.anchor(year) else {
            match policy {
                UnmappedYearPolicy::Drop => debug!(year, "no anchor date: year dropped"),
                UnmappedYearPolicy::Warn => warn!(year, "no anchor date: year dropped"),
            }
            skipped.push(year);
            continue;
        };
        let dates = window.dates_around(anchor)?;
        rows.reserve(dates.len());
        rows.extend(dates.into_iter().map(|(date, offset)| AlignedPoint {
            year,
            date,
            offset,
            value: None,
        }));
    }

    Ok((rows, skipped))
}

/// Phase 2: left join of grid rows against the series by exact date.
///
/// Returns the number of rows that received a value.
pub(crate) fn fill_from_series(rows: &mut [AlignedPoint], series: &Series) -> usize {
    let mut matched = 0;
    for row in rows.iter_mut() {
        row.value = series.value_at(row.date);
        if row.value.is_some() {
            matched += 1;
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::series::TimePoint;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn anchors() -> AnchorTable {
        AnchorTable::new([(2023, ymd(2023, 1, 22)), (2024, ymd(2024, 2, 10))])
    }

    #[test]
    fn grid_covers_every_offset() {
        let window = OffsetWindow::new(-2, 2).unwrap();
        let (rows, skipped) =
            offset_grid(&[2023, 2024], &anchors(), window, UnmappedYearPolicy::Drop).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(rows.len(), 10);
        let offsets_2023: Vec<i64> = rows.iter().filter(|r| r.year == 2023).map(|r| r.offset).collect();
        assert_eq!(offsets_2023, vec![-2, -1, 0, 1, 2]);
        assert!(rows.iter().all(|r| r.value.is_none()));
    }

    #[test]
    fn grid_skips_unmapped_years() {
        let window = OffsetWindow::new(0, 0).unwrap();
        for policy in [UnmappedYearPolicy::Drop, UnmappedYearPolicy::Warn] {
            let (rows, skipped) = offset_grid(&[2015, 2023, 2099], &anchors(), window, policy).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].date, ymd(2023, 1, 22));
            assert_eq!(skipped, vec![2015, 2099]);
        }
    }

    #[test]
    fn fill_is_exact_date_left_join() {
        let series = Series::new(vec![
            TimePoint::new(ymd(2023, 1, 21), Some(4.0)),
            TimePoint::new(ymd(2023, 1, 23), None),
            TimePoint::new(ymd(2023, 3, 1), Some(9.0)),
        ])
        .unwrap();
        let window = OffsetWindow::new(-1, 1).unwrap();
        let (mut rows, _) = offset_grid(&[2023], &anchors(), window, UnmappedYearPolicy::Drop).unwrap();
        let matched = fill_from_series(&mut rows, &series);
        assert_eq!(matched, 1);
        let values: Vec<Option<f64>> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![Some(4.0), None, None]);
    }

    #[test]
    fn interpolation_bridges_between_known_rows_only() {
        let series = Series::new(vec![
            TimePoint::new(ymd(2023, 1, 20), Some(8.0)),
            TimePoint::new(ymd(2023, 1, 25), Some(10.0)),
        ])
        .unwrap();
        let window = OffsetWindow::new(-7, 7).unwrap();
        let table = align(&series, &anchors(), window, UnmappedYearPolicy::Drop).unwrap();
        let values = table.year_values(2023).unwrap();
        assert!(values[..5].iter().all(Option::is_none));
        assert!(values[11..].iter().all(Option::is_none));
        assert_eq!(values[5], Some(8.0));
        assert_eq!(values[10], Some(10.0));
    }

    #[test]
    fn empty_series_gives_empty_table() {
        let table = align(
            &Series::default(),
            &anchors(),
            OffsetWindow::default(),
            UnmappedYearPolicy::Drop,
        )
        .unwrap();
        assert!(table.is_empty());
        assert!(table.skipped_years().is_empty());
    }
}
