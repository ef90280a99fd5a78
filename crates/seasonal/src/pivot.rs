//! Month x year pivot of monthly means.

use std::collections::BTreeMap;

use chrono::Datelike;
use seasonkit_stats::{interpolate_inside, mean_present};

use crate::series::Series;

/// Monthly means laid out with months as rows and years as columns.
///
/// Rows hold only the months that occur in the data. Within each year
/// column, empty cells between two known months are interpolated; leading
/// and trailing empty months stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyPivot {
    months: Vec<u32>,
    years: Vec<i32>,
    /// Row-major: `cells[month_idx][year_idx]`.
    cells: Vec<Vec<Option<f64>>>,
}

impl MonthlyPivot {
    /// Returns the row labels (months, ascending).
    pub fn months(&self) -> &[u32] {
        &self.months
    }

    /// Returns the column labels (years, ascending).
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the cell for `month` and `year`.
    pub fn value(&self, month: u32, year: i32) -> Option<f64> {
        let m = self.months.binary_search(&month).ok()?;
        let y = self.years.binary_search(&year).ok()?;
        self.cells[m][y]
    }

    /// Returns one year's column in month order.
    pub fn column(&self, year: i32) -> Option<Vec<Option<f64>>> {
        let y = self.years.binary_search(&year).ok()?;
        Some(self.cells.iter().map(|row| row[y]).collect())
    }

    /// Returns `true` if the pivot has no rows.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Builds the month x year pivot of monthly means.
pub fn monthly_pivot(series: &Series) -> MonthlyPivot {
    let mut groups: BTreeMap<(u32, i32), Vec<Option<f64>>> = BTreeMap::new();
    for p in series.points() {
        groups
            .entry((p.date().month(), p.date().year()))
            .or_default()
            .push(p.value());
    }

    let mut months: Vec<u32> = groups.keys().map(|&(m, _)| m).collect();
    months.sort_unstable();
    months.dedup();
    let years = series.years();

    let mut cells = vec![vec![None; years.len()]; months.len()];
    for ((month, year), values) in &groups {
        // Both lookups succeed: the labels were collected from these keys.
        if let (Ok(m), Ok(y)) = (months.binary_search(month), years.binary_search(year)) {
            cells[m][y] = mean_present(values);
        }
    }

    for y in 0..years.len() {
        let mut column: Vec<Option<f64>> = cells.iter().map(|row| row[y]).collect();
        interpolate_inside(&mut column);
        for (row, value) in cells.iter_mut().zip(column) {
            row[y] = value;
        }
    }

    MonthlyPivot {
        months,
        years,
        cells,
    }
}
