//! Calendar mode parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// The calendar axis a seasonal view is built on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalendarMode {
    /// Calendar year; observations keep their own month and day.
    #[default]
    Gregorian,
    /// Day offsets relative to each year's lunar new year.
    Lunar,
}

impl CalendarMode {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Lunar => "lunar",
        }
    }
}

impl fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" | "solar" | "公历" => Ok(Self::Gregorian),
            "lunar" | "农历" => Ok(Self::Lunar),
            _ => Err(CalendarError::UnsupportedCalendar {
                name: s.to_string(),
            }),
        }
    }
}
