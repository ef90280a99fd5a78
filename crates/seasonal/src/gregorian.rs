//! Calendar-year view: each observation keeps its own year and month.

use chrono::{Datelike, NaiveDate};

use crate::series::Series;

/// An observation tagged with its calendar year and month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GregorianPoint {
    year: i32,
    month: u32,
    date: NaiveDate,
    value: Option<f64>,
}

impl GregorianPoint {
    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the observed value.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Long-form calendar-year table, in date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GregorianTable {
    points: Vec<GregorianPoint>,
}

impl GregorianTable {
    /// Returns all rows.
    pub fn points(&self) -> &[GregorianPoint] {
        &self.points
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.year).collect();
        years.dedup();
        years
    }

    /// Returns the rows of one year in date order.
    pub fn year_points(&self, year: i32) -> Vec<&GregorianPoint> {
        self.points.iter().filter(|p| p.year == year).collect()
    }

    /// Keeps only the `n` most recent years.
    pub fn latest_years(&self, n: usize) -> GregorianTable {
        let years = self.years();
        let keep = &years[years.len().saturating_sub(n)..];
        GregorianTable {
            points: self
                .points
                .iter()
                .filter(|p| keep.contains(&p.year))
                .copied()
                .collect(),
        }
    }
}

/// Tags each observation with its calendar year and month.
pub fn gregorian_points(series: &Series) -> GregorianTable {
    let points = series
        .points()
        .iter()
        .map(|p| GregorianPoint {
            year: p.date().year(),
            month: p.date().month(),
            date: p.date(),
            value: p.value(),
        })
        .collect();
    GregorianTable { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimePoint;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series() -> Series {
        Series::new(vec![
            TimePoint::new(ymd(2021, 3, 5), Some(1.0)),
            TimePoint::new(ymd(2022, 12, 31), Some(2.0)),
            TimePoint::new(ymd(2023, 1, 1), None),
            TimePoint::new(ymd(2023, 7, 4), Some(4.0)),
        ])
        .unwrap()
    }

    #[test]
    fn extracts_year_and_month() {
        let t = gregorian_points(&series());
        assert_eq!(t.len(), 4);
        let fields: Vec<(i32, u32)> = t.points().iter().map(|p| (p.year(), p.month())).collect();
        assert_eq!(fields, vec![(2021, 3), (2022, 12), (2023, 1), (2023, 7)]);
        assert_eq!(t.points()[2].value(), None);
    }

    #[test]
    fn latest_years() {
        let t = gregorian_points(&series()).latest_years(2);
        assert_eq!(t.years(), vec![2022, 2023]);
        assert_eq!(t.year_points(2023).len(), 2);
    }

    #[test]
    fn empty() {
        let t = gregorian_points(&Series::default());
        assert!(t.is_empty());
        assert!(t.latest_years(3).is_empty());
    }
}
