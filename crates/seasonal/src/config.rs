//! Configuration for seasonal views.

use std::str::FromStr;

use seasonkit_calendar::{CalendarMode, OffsetWindow};

use crate::error::SeasonalError;

/// What to do with input years that have no anchor date.
///
/// Such years are never aligned; the policy only controls how loudly they
/// are dropped. Either way they are listed in
/// [`crate::AlignedTable::skipped_years`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmappedYearPolicy {
    /// Drop silently (a `debug` event only).
    #[default]
    Drop,
    /// Drop and emit a `warn` event per year.
    Warn,
}

impl FromStr for UnmappedYearPolicy {
    type Err = SeasonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "warn" => Ok(Self::Warn),
            other => Err(SeasonalError::InvalidConfig {
                reason: format!("unknown unmapped-year policy: {other:?}"),
            }),
        }
    }
}

/// Configuration for building a seasonal view.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use seasonkit_calendar::{CalendarMode, OffsetWindow};
/// use seasonkit_seasonal::SeasonalConfig;
///
/// let config = SeasonalConfig::new()
///     .with_calendar(CalendarMode::Lunar)
///     .with_window(OffsetWindow::new(-30, 60).unwrap())
///     .with_years(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SeasonalConfig {
    calendar: CalendarMode,
    window: OffsetWindow,
    years: usize,
    unmapped_years: UnmappedYearPolicy,
}

impl SeasonalConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `calendar = Gregorian`, `window = -70..=70`, `years = 5`,
    /// `unmapped_years = Drop`.
    pub fn new() -> Self {
        Self {
            calendar: CalendarMode::Gregorian,
            window: OffsetWindow::default(),
            years: 5,
            unmapped_years: UnmappedYearPolicy::Drop,
        }
    }

    /// Sets the calendar mode.
    pub fn with_calendar(mut self, mode: CalendarMode) -> Self {
        self.calendar = mode;
        self
    }

    /// Sets the day-offset window used in lunar mode.
    pub fn with_window(mut self, window: OffsetWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets how many of the most recent years to keep.
    pub fn with_years(mut self, n: usize) -> Self {
        self.years = n;
        self
    }

    /// Sets the policy for years missing from the anchor table.
    pub fn with_unmapped_years(mut self, policy: UnmappedYearPolicy) -> Self {
        self.unmapped_years = policy;
        self
    }

    /// Returns the calendar mode.
    pub fn calendar(&self) -> CalendarMode {
        self.calendar
    }

    /// Returns the day-offset window.
    pub fn window(&self) -> OffsetWindow {
        self.window
    }

    /// Returns the number of most recent years kept.
    pub fn years(&self) -> usize {
        self.years
    }

    /// Returns the unmapped-year policy.
    pub fn unmapped_years(&self) -> UnmappedYearPolicy {
        self.unmapped_years
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SeasonalError> {
        if self.years == 0 {
            return Err(SeasonalError::InvalidConfig {
                reason: "years must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SeasonalConfig::new();
        assert_eq!(cfg.calendar(), CalendarMode::Gregorian);
        assert_eq!(cfg.window(), OffsetWindow::new(-70, 70).unwrap());
        assert_eq!(cfg.years(), 5);
        assert_eq!(cfg.unmapped_years(), UnmappedYearPolicy::Drop);
    }

    #[test]
    fn builder_chaining() {
        let cfg = SeasonalConfig::new()
            .with_calendar(CalendarMode::Lunar)
            .with_window(OffsetWindow::new(-7, 7).unwrap())
            .with_years(2)
            .with_unmapped_years(UnmappedYearPolicy::Warn);
        assert_eq!(cfg.calendar(), CalendarMode::Lunar);
        assert_eq!(cfg.window().n_offsets(), 15);
        assert_eq!(cfg.years(), 2);
        assert_eq!(cfg.unmapped_years(), UnmappedYearPolicy::Warn);
    }

    #[test]
    fn validate_ok() {
        assert!(SeasonalConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_zero_years() {
        let err = SeasonalConfig::new().with_years(0).validate().unwrap_err();
        assert_eq!(
            err,
            SeasonalError::InvalidConfig {
                reason: "years must be >= 1".to_string()
            }
        );
    }

    #[test]
    fn parse_policy() {
        assert_eq!("drop".parse::<UnmappedYearPolicy>(), Ok(UnmappedYearPolicy::Drop));
        assert_eq!("WARN".parse::<UnmappedYearPolicy>(), Ok(UnmappedYearPolicy::Warn));
        assert!("raise".parse::<UnmappedYearPolicy>().is_err());
    }

    #[test]
    fn default_matches_new() {
        let d = SeasonalConfig::default();
        let n = SeasonalConfig::new();
        assert_eq!(d.years(), n.years());
        assert_eq!(d.window(), n.window());
    }
}
