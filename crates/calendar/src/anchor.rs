//! Year to anchor-date lookup.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Lunar new year (Spring Festival) dates as `(year, month, day)`.
///
/// Needs a new row each year; years outside the table cannot be aligned.
#[rustfmt::skip]
const LUNAR_NEW_YEAR: [(i32, u32, u32); 10] = [
    (2016, 2, 8), (2017, 1, 28), (2018, 2, 16), (2019, 2, 4), (2020, 1, 25),
    (2021, 2, 12), (2022, 2, 1), (2023, 1, 22), (2024, 2, 10), (2025, 1, 29),
];

static LUNAR_NEW_YEAR_TABLE: LazyLock<AnchorTable> = LazyLock::new(|| {
    AnchorTable::from_ymd(&LUNAR_NEW_YEAR).expect("built-in lunar new year dates are valid")
});

/// Immutable mapping from calendar year to that year's anchor date.
///
/// Each year has at most one anchor. Years missing from the table are not
/// an error at lookup time: [`AnchorTable::anchor`] simply returns `None`
/// and callers decide what to do with the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTable {
    entries: BTreeMap<i32, NaiveDate>,
}

impl AnchorTable {
    /// Creates a table from `(year, anchor)` pairs.
    ///
    /// A later pair for the same year replaces an earlier one.
    pub fn new(entries: impl IntoIterator<Item = (i32, NaiveDate)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Creates a table from `(year, month, day)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if a triple is not a real date.
    pub fn from_ymd(entries: &[(i32, u32, u32)]) -> Result<Self, CalendarError> {
        let mut map = BTreeMap::new();
        for &(year, month, day) in entries {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(CalendarError::InvalidDate { year, month, day })?;
            map.insert(year, date);
        }
        Ok(Self { entries: map })
    }

    /// Returns the built-in lunar new year table (2016..=2025).
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn lunar_new_year() -> &'static AnchorTable {
        &LUNAR_NEW_YEAR_TABLE
    }

    /// Returns the anchor date for `year`, if the table has one.
    pub fn anchor(&self, year: i32) -> Option<NaiveDate> {
        self.entries.get(&year).copied()
    }

    /// Returns `true` if the table has an anchor for `year`.
    pub fn contains(&self, year: i32) -> bool {
        self.entries.contains_key(&year)
    }

    /// Iterates over `(year, anchor)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, NaiveDate)> + '_ {
        self.entries.iter().map(|(&y, &d)| (y, d))
    }

    /// Returns the covered years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.entries.keys().copied().collect()
    }

    /// Returns the earliest covered year.
    pub fn first_year(&self) -> Option<i32> {
        self.entries.keys().next().copied()
    }

    /// Returns the latest covered year.
    pub fn last_year(&self) -> Option<i32> {
        self.entries.keys().next_back().copied()
    }

    /// Returns the number of years in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
