//! CSV reading and cell parsing.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::IoError;
use crate::reader::{RawColumns, ReaderConfig, select_columns};

/// Date formats tried in order for CSV cells.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Cell texts read as missing values (compared case-insensitively).
const NULL_TOKENS: [&str; 6] = ["", "nan", "na", "n/a", "null", "none"];

/// Extracts the configured date and value columns from a CSV file with a
/// header row.
pub(crate) fn read_columns(path: &Path, config: &ReaderConfig) -> Result<RawColumns, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let header_refs: Vec<&str> = headers.iter().collect();
    let (date_idx, value_cols) = select_columns(&header_refs, config, path)?;

    let mut raw = RawColumns::default();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); value_cols.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let date_text = record.get(date_idx).unwrap_or_default();
        let date = parse_date(date_text).ok_or_else(|| IoError::InvalidDate {
            column: config.date_column().to_string(),
            row,
            text: date_text.to_string(),
        })?;
        raw.dates.push(date);

        for ((idx, name), column) in value_cols.iter().zip(columns.iter_mut()) {
            let text = record.get(*idx).unwrap_or_default();
            let value = parse_value(text).ok_or_else(|| IoError::InvalidValue {
                column: name.clone(),
                row,
                text: text.to_string(),
            })?;
            column.push(value);
        }
    }

    for ((_, name), column) in value_cols.into_iter().zip(columns) {
        raw.values.insert(name, column);
    }
    Ok(raw)
}

/// Parses a calendar date; a trailing time of day (`2023-01-22 00:00:00` or
/// `2023-01-22T00:00:00`) is ignored.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let day = text.split(['T', ' ']).next().unwrap_or(text);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}

/// Parses a numeric cell. Returns `Some(None)` for a missing value and
/// `None` if the text is not a number.
pub(crate) fn parse_value(text: &str) -> Option<Option<f64>> {
    if NULL_TOKENS.iter().any(|t| text.eq_ignore_ascii_case(t)) {
        return Some(None);
    }
    text.replace(',', "").parse::<f64>().ok().map(Some)
}
