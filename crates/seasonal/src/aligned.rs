//! Output types for lunar alignment.

use chrono::NaiveDate;
use seasonkit_calendar::OffsetWindow;

/// One row of an aligned table: a date placed at its day offset from the
/// anchor of `year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedPoint {
    pub(crate) year: i32,
    pub(crate) date: NaiveDate,
    pub(crate) offset: i64,
    pub(crate) value: Option<f64>,
}

impl AlignedPoint {
    /// Returns the anchor year this row was aligned to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar date of the row.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the signed day distance from the year's anchor.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Returns the observed or interpolated value.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Long-form result of [`crate::align`]: one row per (year, offset).
///
/// Rows are ordered by date, then year. Every year present covers every
/// offset of the window exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable {
    points: Vec<AlignedPoint>,
    window: OffsetWindow,
    skipped_years: Vec<i32>,
}

impl AlignedTable {
    pub(crate) fn new(points: Vec<AlignedPoint>, window: OffsetWindow, skipped_years: Vec<i32>) -> Self {
        Self {
            points,
            window,
            skipped_years,
        }
    }

    /// Returns all rows.
    pub fn points(&self) -> &[AlignedPoint] {
        &self.points
    }

    /// Consumes the table and returns its rows.
    pub fn into_points(self) -> Vec<AlignedPoint> {
        self.points
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no year qualified for alignment.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the window the table was built with.
    pub fn window(&self) -> OffsetWindow {
        self.window
    }

    /// Returns input years dropped for lack of an anchor date.
    pub fn skipped_years(&self) -> &[i32] {
        &self.skipped_years
    }

    /// Returns the aligned years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Returns the rows of one year in offset order.
    pub fn year_points(&self, year: i32) -> Vec<&AlignedPoint> {
        self.points.iter().filter(|p| p.year == year).collect()
    }

    /// Returns one year's values indexed by offset (`lo` first).
    ///
    /// Returns `None` if the year is not in the table.
    pub fn year_values(&self, year: i32) -> Option<Vec<Option<f64>>> {
        let rows = self.year_points(year);
        if rows.is_empty() {
            return None;
        }
        Some(rows.into_iter().map(|p| p.value).collect())
    }

    /// Returns the x-axis: every offset of the window, ascending. Empty if
    /// the table is empty.
    pub fn offsets(&self) -> Vec<i64> {
        if self.is_empty() {
            return Vec::new();
        }
        self.window.offsets().collect()
    }

    /// Keeps only the `n` most recent years.
    pub fn latest_years(&self, n: usize) -> AlignedTable {
        let years = self.years();
        let keep = &years[years.len().saturating_sub(n)..];
        let points = self
            .points
            .iter()
            .filter(|p| keep.contains(&p.year))
            .copied()
            .collect();
        AlignedTable::new(points, self.window, self.skipped_years.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(year: i32, date: NaiveDate, offset: i64, value: Option<f64>) -> AlignedPoint {
        AlignedPoint {
            year,
            date,
            offset,
            value,
        }
    }

    fn table() -> AlignedTable {
        let window = OffsetWindow::new(0, 1).unwrap();
        AlignedTable::new(
            vec![
                point(2022, ymd(2022, 2, 1), 0, Some(1.0)),
                point(2022, ymd(2022, 2, 2), 1, Some(2.0)),
                point(2023, ymd(2023, 1, 22), 0, Some(3.0)),
                point(2023, ymd(2023, 1, 23), 1, None),
                point(2024, ymd(2024, 2, 10), 0, Some(5.0)),
                point(2024, ymd(2024, 2, 11), 1, Some(6.0)),
            ],
            window,
            vec![2099],
        )
    }

    #[test]
    fn accessors() {
        let t = table();
        assert_eq!(t.len(), 6);
        assert!(!t.is_empty());
        assert_eq!(t.years(), vec![2022, 2023, 2024]);
        assert_eq!(t.skipped_years(), &[2099]);
        assert_eq!(t.offsets(), vec![0, 1]);
    }

    #[test]
    fn year_values_by_offset() {
        let t = table();
        assert_eq!(t.year_values(2023), Some(vec![Some(3.0), None]));
        assert_eq!(t.year_values(2030), None);
        let rows = t.year_points(2024);
        assert_eq!(rows[0].offset(), 0);
        assert_eq!(rows[1].date(), ymd(2024, 2, 11));
    }

    #[test]
    fn latest_years_keeps_tail() {
        let t = table().latest_years(2);
        assert_eq!(t.years(), vec![2023, 2024]);
        assert_eq!(t.len(), 4);
        assert_eq!(t.skipped_years(), &[2099]);
    }

    #[test]
    fn latest_years_more_than_available() {
        let t = table().latest_years(10);
        assert_eq!(t.years(), vec![2022, 2023, 2024]);
    }

    #[test]
    fn empty_table_has_no_offsets() {
        let t = AlignedTable::new(Vec::new(), OffsetWindow::default(), Vec::new());
        assert!(t.offsets().is_empty());
        assert!(t.years().is_empty());
    }
}
