//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use seasonkit_calendar::{AnchorTable, CalendarMode, OffsetWindow};
use seasonkit_io::{Compression, ReaderConfig, WriterConfig};
use seasonkit_seasonal::{SeasonalConfig, UnmappedYearPolicy};

use crate::config::{IoToml, SeasonalToml};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a calendar mode name (`gregorian`, `lunar`, ...).
pub fn parse_calendar(s: &str) -> Result<CalendarMode> {
    Ok(s.parse::<CalendarMode>()?)
}

/// Parses an unmapped-year policy name (`drop` or `warn`).
pub fn parse_unmapped_policy(s: &str) -> Result<UnmappedYearPolicy> {
    Ok(s.parse::<UnmappedYearPolicy>()?)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_value_columns(&io.value_columns)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size))
}

/// Builds a [`SeasonalConfig`] from the TOML seasonal configuration.
pub fn build_seasonal_config(seasonal: &SeasonalToml) -> Result<SeasonalConfig> {
    let [lo, hi] = seasonal.window;
    let window = OffsetWindow::new(lo, hi)?;
    let cfg = SeasonalConfig::new()
        .with_calendar(parse_calendar(&seasonal.calendar)?)
        .with_window(window)
        .with_years(seasonal.years)
        .with_unmapped_years(parse_unmapped_policy(&seasonal.unmapped_years)?);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the anchor table: the built-in lunar new year dates, extended or
/// overridden by `[[seasonal.anchors]]` entries.
pub fn build_anchor_table(seasonal: &SeasonalToml) -> Result<AnchorTable> {
    let extra = seasonal
        .anchors
        .iter()
        .map(|a| {
            let date = parse_date(&a.date)
                .with_context(|| format!("anchor for year {}", a.year))?;
            Ok((a.year, date))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AnchorTable::new(
        AnchorTable::lunar_new_year().iter().chain(extra),
    ))
}
