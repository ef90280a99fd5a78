//! # seasonkit-seasonal
//!
//! Seasonal reshaping of date-indexed series. A series is either split by
//! calendar year (gregorian mode) or re-indexed as day offsets around each
//! year's lunar new year (lunar mode), so that several years can be overlaid
//! on a common axis. Headline figures (latest value, YoY, YTD) are computed
//! separately by [`summarize`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Series"] -->|"prepare()"| B{"CalendarMode"}
//!     B -->|"Gregorian"| C["GregorianTable"]
//!     B -->|"Lunar"| D["align()"]
//!     D -->|"1. offset grid"| E["AlignedPoint rows"]
//!     E -->|"2. exact-date fill"| F["sparse rows"]
//!     F -->|"3. inside interpolation"| G["AlignedTable"]
//!     A -->|"monthly_pivot()"| H["MonthlyPivot"]
//!     A -->|"summarize()"| I["SeasonalSummary"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use seasonkit_calendar::{AnchorTable, CalendarMode, OffsetWindow};
//! use seasonkit_seasonal::{SeasonalConfig, SeasonalView, Series, prepare, summarize};
//!
//! let dates = [
//!     NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 1, 24).unwrap(),
//! ];
//! let series = Series::from_columns(&dates, &[Some(8.0), Some(10.0)]).unwrap();
//!
//! let config = SeasonalConfig::new()
//!     .with_calendar(CalendarMode::Lunar)
//!     .with_window(OffsetWindow::new(-3, 3).unwrap());
//! let SeasonalView::Lunar(table) =
//!     prepare(&series, &config, AnchorTable::lunar_new_year()).unwrap()
//! else {
//!     unreachable!()
//! };
//! assert_eq!(table.offsets(), vec![-3, -2, -1, 0, 1, 2, 3]);
//!
//! let summary = summarize(&series);
//! assert_eq!(summary.latest_value, Some(10.0));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | Validated, date-sorted input series |
//! | `config` | View configuration and unmapped-year policy |
//! | `align` | Anchor-relative alignment with bounded interpolation |
//! | `aligned` | Aligned output table |
//! | `gregorian` | Calendar-year extraction |
//! | `pivot` | Month x year mean pivot |
//! | `summary` | Latest value, YoY and YTD |
//! | `view` | Calendar-mode dispatch |
//! | `error` | Error types |

mod align;
mod aligned;
mod config;
mod error;
mod gregorian;
mod pivot;
mod series;
mod summary;
mod view;

pub use align::align;
pub use aligned::{AlignedPoint, AlignedTable};
pub use config::{SeasonalConfig, UnmappedYearPolicy};
pub use error::SeasonalError;
pub use gregorian::{GregorianPoint, GregorianTable, gregorian_points};
pub use pivot::{MonthlyPivot, monthly_pivot};
pub use series::{Series, TimePoint};
pub use summary::{SeasonalSummary, summarize};
pub use view::{SeasonalView, prepare};
