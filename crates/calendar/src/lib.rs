//! # seasonkit-calendar
//!
//! Calendar plumbing for seasonal views: the anchor-date table each year is
//! aligned against, the calendar modes a caller may request, and inclusive
//! day-offset windows around an anchor.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["AnchorTable"] -->|".anchor(year)"| B["NaiveDate"]
//!     B -->|"OffsetWindow::dates_around()"| C["Vec of (date, offset)"]
//!     D["&str"] -->|"CalendarMode::from_str()"| E["CalendarMode"]
//!     F["start date"] -->|"date_sequence()"| G["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use seasonkit_calendar::{AnchorTable, CalendarMode, OffsetWindow};
//!
//! let anchors = AnchorTable::lunar_new_year();
//! let anchor = anchors.anchor(2023).unwrap(); // 2023-01-22
//!
//! let window = OffsetWindow::new(-7, 7).unwrap();
//! let dates = window.dates_around(anchor).unwrap();
//! assert_eq!(dates.len(), 15);
//! assert_eq!(dates[0].1, -7);
//!
//! let mode: CalendarMode = "lunar".parse().unwrap();
//! assert_eq!(mode, CalendarMode::Lunar);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `anchor` | Year to anchor-date lookup, built-in lunar new year table |
//! | `mode` | Calendar mode parsing |
//! | `window` | Inclusive day-offset windows |
//! | `sequence` | Contiguous date sequences |
//! | `error` | Error types |

mod anchor;
mod error;
mod mode;
mod sequence;
mod window;

pub use anchor::AnchorTable;
pub use error::CalendarError;
pub use mode::CalendarMode;
pub use sequence::{date_sequence, day_offset};
pub use window::OffsetWindow;
