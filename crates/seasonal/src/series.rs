//! Date-indexed observations.

use chrono::{Datelike, NaiveDate};

use crate::error::SeasonalError;

/// A single dated observation. `value` is `None` when the observation is
/// missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    date: NaiveDate,
    value: Option<f64>,
}

impl TimePoint {
    /// Creates a new point.
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the observed value, if any.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Owned, date-sorted series with unique dates.
///
/// Built once from caller data and reused by every seasonal view. `NaN`
/// values are stored as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<TimePoint>,
}

impl Series {
    /// Builds a series from points in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonalError::DuplicateDate`] if a date repeats, or
    /// [`SeasonalError::NonFiniteInput`] if a value is infinite.
    pub fn new(mut points: Vec<TimePoint>) -> Result<Self, SeasonalError> {
        for p in &mut points {
            match p.value {
                Some(v) if v.is_nan() => p.value = None,
                Some(v) if v.is_infinite() => {
                    return Err(SeasonalError::NonFiniteInput { date: p.date });
                }
                _ => {}
            }
        }

        points.sort_by_key(|p| p.date);
        if let Some(w) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(SeasonalError::DuplicateDate { date: w[0].date });
        }

        Ok(Self { points })
    }

    /// Builds a series from parallel date and value columns.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonalError::LengthMismatch`] if the columns differ in
    /// length, plus the errors of [`Series::new`].
    pub fn from_columns(dates: &[NaiveDate], values: &[Option<f64>]) -> Result<Self, SeasonalError> {
        if values.len() != dates.len() {
            return Err(SeasonalError::LengthMismatch {
                field: "values",
                expected: dates.len(),
                got: values.len(),
            });
        }
        let points = dates
            .iter()
            .zip(values)
            .map(|(&date, &value)| TimePoint::new(date, value))
            .collect();
        Self::new(points)
    }

    /// Returns the points in ascending date order.
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Returns the dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Returns the values in date order.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the earliest date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Returns the latest date.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Returns the distinct calendar years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.date.year()).collect();
        years.dedup();
        years
    }

    /// Returns the point on `date`, if the series has one.
    pub fn get(&self, date: NaiveDate) -> Option<&TimePoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| &self.points[i])
    }

    /// Returns the value on `date`; `None` if the date is absent or missing.
    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        self.get(date).and_then(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Series {
        Series::new(vec![
            TimePoint::new(ymd(2023, 1, 25), Some(10.0)),
            TimePoint::new(ymd(2022, 12, 31), None),
            TimePoint::new(ymd(2023, 1, 20), Some(8.0)),
        ])
        .unwrap()
    }

    #[test]
    fn sorts_on_construction() {
        let s = sample();
        assert_eq!(
            s.dates(),
            vec![ymd(2022, 12, 31), ymd(2023, 1, 20), ymd(2023, 1, 25)]
        );
        assert_eq!(s.values(), vec![None, Some(8.0), Some(10.0)]);
        assert_eq!(s.first_date(), Some(ymd(2022, 12, 31)));
        assert_eq!(s.last_date(), Some(ymd(2023, 1, 25)));
    }

    #[test]
    fn years_are_distinct() {
        assert_eq!(sample().years(), vec![2022, 2023]);
    }

    #[test]
    fn lookup() {
        let s = sample();
        assert_eq!(s.value_at(ymd(2023, 1, 20)), Some(8.0));
        assert_eq!(s.value_at(ymd(2022, 12, 31)), None);
        assert!(s.get(ymd(2022, 12, 31)).is_some());
        assert!(s.get(ymd(2023, 1, 21)).is_none());
    }

    #[test]
    fn nan_becomes_missing() {
        let s = Series::new(vec![TimePoint::new(ymd(2023, 1, 1), Some(f64::NAN))]).unwrap();
        assert_eq!(s.values(), vec![None]);
    }

    #[test]
    fn infinity_rejected() {
        let err = Series::new(vec![TimePoint::new(ymd(2023, 1, 1), Some(f64::INFINITY))])
            .unwrap_err();
        assert_eq!(
            err,
            SeasonalError::NonFiniteInput {
                date: ymd(2023, 1, 1)
            }
        );
    }

    #[test]
    fn duplicate_rejected() {
        let err = Series::new(vec![
            TimePoint::new(ymd(2023, 1, 1), Some(1.0)),
            TimePoint::new(ymd(2023, 1, 2), Some(2.0)),
            TimePoint::new(ymd(2023, 1, 1), Some(3.0)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SeasonalError::DuplicateDate {
                date: ymd(2023, 1, 1)
            }
        );
    }

    #[test]
    fn from_columns_length_mismatch() {
        let err = Series::from_columns(&[ymd(2023, 1, 1)], &[Some(1.0), Some(2.0)]).unwrap_err();
        assert!(matches!(
            err,
            SeasonalError::LengthMismatch {
                field: "values",
                expected: 1,
                got: 2,
            }
        ));
    }

    #[test]
    fn empty_series() {
        let s = Series::default();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.years().is_empty());
        assert_eq!(s.first_date(), None);
    }
}
