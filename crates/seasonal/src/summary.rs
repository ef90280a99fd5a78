//! Latest value, YoY and YTD annotations.

use std::fmt;

use seasonkit_stats::{pct_change, sum_present};
use serde::Serialize;
use tracing::debug;

use crate::series::Series;

/// Headline figures for a series, as shown in a chart subtitle.
///
/// `None` marks a figure that cannot be computed (too few rows, a missing
/// value, or a zero denominator). It serializes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeasonalSummary {
    /// Value of the last row.
    pub latest_value: Option<f64>,
    /// Change of the last row against the row before it, in percent.
    ///
    /// This is a period-over-period change on the previous row, not a
    /// comparison with the same date one year earlier.
    pub year_over_year_pct: Option<f64>,
    /// Change of the cumulative sum against the cumulative sum without the
    /// last row, in percent.
    pub year_to_date_pct: Option<f64>,
}

impl SeasonalSummary {
    /// Renders the subtitle text, e.g. `latest: 121.00 | YoY: 10.0% | YTD: 57.6%`.
    ///
    /// Missing figures render as `N/A`.
    pub fn annotation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeasonalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.latest_value {
            Some(v) => write!(f, "latest: {v:.2}")?,
            None => f.write_str("latest: N/A")?,
        }
        match self.year_over_year_pct {
            Some(p) => write!(f, " | YoY: {p:.1}%")?,
            None => f.write_str(" | YoY: N/A")?,
        }
        match self.year_to_date_pct {
            Some(p) => write!(f, " | YTD: {p:.1}%"),
            None => f.write_str(" | YTD: N/A"),
        }
    }
}

/// Computes the latest value, YoY and YTD of a date-sorted series.
///
/// YoY compares the last row with the second-to-last row. YTD compares the
/// sum of all present values with the sum excluding the last row. Neither
/// ever fails: degenerate input yields `None` fields.
pub fn summarize(series: &Series) -> SeasonalSummary {
    let values = series.values();
    let Some((&latest, head)) = values.split_last() else {
        return SeasonalSummary::default();
    };
    let Some(&previous) = head.last() else {
        return SeasonalSummary {
            latest_value: latest,
            ..SeasonalSummary::default()
        };
    };

    let summary = SeasonalSummary {
        latest_value: latest,
        year_over_year_pct: pct_change(latest, previous),
        year_to_date_pct: pct_change(Some(sum_present(&values)), Some(sum_present(head))),
    };
    debug!(n_points = values.len(), %summary, "summary computed");
    summary
}
