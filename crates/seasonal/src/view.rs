//! Calendar-mode dispatch.

use seasonkit_calendar::{AnchorTable, CalendarMode};
use tracing::info;

use crate::align::align;
use crate::aligned::AlignedTable;
use crate::config::SeasonalConfig;
use crate::error::SeasonalError;
use crate::gregorian::{GregorianTable, gregorian_points};
use crate::series::Series;

/// A seasonal view of one series, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonalView {
    /// Calendar-year rows keyed by (year, month).
    Gregorian(GregorianTable),
    /// Anchor-aligned rows keyed by (year, offset).
    Lunar(AlignedTable),
}

impl SeasonalView {
    /// Returns the calendar mode the view was built in.
    pub fn mode(&self) -> CalendarMode {
        match self {
            Self::Gregorian(_) => CalendarMode::Gregorian,
            Self::Lunar(_) => CalendarMode::Lunar,
        }
    }

    /// Returns the years present in the view, ascending.
    pub fn years(&self) -> Vec<i32> {
        match self {
            Self::Gregorian(t) => t.years(),
            Self::Lunar(t) => t.years(),
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Gregorian(t) => t.len(),
            Self::Lunar(t) => t.len(),
        }
    }

    /// Returns `true` if the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the view `config` asks for, keeping only the most recent years.
///
/// Lunar mode aligns against `anchors`; gregorian mode ignores them.
///
/// # Errors
///
/// Returns [`SeasonalError::InvalidConfig`] if the configuration is invalid,
/// or [`SeasonalError::Calendar`] if alignment fails.
#[tracing::instrument(skip_all, fields(mode = %config.calendar(), n_points = series.len()))]
pub fn prepare(
    series: &Series,
    config: &SeasonalConfig,
    anchors: &AnchorTable,
) -> Result<SeasonalView, SeasonalError> {
    config.validate()?;

    let view = match config.calendar() {
        CalendarMode::Gregorian => {
            SeasonalView::Gregorian(gregorian_points(series).latest_years(config.years()))
        }
        CalendarMode::Lunar => {
            let table = align(series, anchors, config.window(), config.unmapped_years())?;
            SeasonalView::Lunar(table.latest_years(config.years()))
        }
    };

    info!(years = ?view.years(), n_rows = view.len(), "seasonal view prepared");
    Ok(view)
}
