//! High-level reader configuration and orchestration.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use seasonkit_seasonal::Series;
use tracing::{debug, info};

use crate::csv_read;
use crate::error::IoError;
use crate::parquet_read;

/// Configuration for reading date-indexed series from tabular files.
///
/// Columns are addressed by name. The [`Default`] implementation reads the
/// `date` column as the index and every other column as a value series.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Name of the date column.
    date_column: String,
    /// Names of the value columns; empty means every non-date column.
    value_columns: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            value_columns: Vec::new(),
        }
    }
}

impl ReaderConfig {
    /// Set the date column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the value column names. An empty list selects every column
    /// except the date column.
    pub fn with_value_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_columns = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the date column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the requested value column names.
    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the date column name is empty, a
    /// value column repeats, or the date column is also listed as a value.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut problems = Vec::new();
        if self.date_column.trim().is_empty() {
            problems.push("date_column is empty".to_string());
        }
        for (i, name) in self.value_columns.iter().enumerate() {
            if *name == self.date_column {
                problems.push(format!("'{name}' is both the date column and a value column"));
            }
            if self.value_columns[..i].contains(name) {
                problems.push(format!("duplicate value column '{name}'"));
            }
        }
        if !problems.is_empty() {
            return Err(IoError::Validation {
                count: problems.len(),
                details: problems.join("; "),
            });
        }
        Ok(())
    }
}

/// Raw column data shared by the format-specific readers.
#[derive(Debug, Default)]
pub(crate) struct RawColumns {
    pub dates: Vec<NaiveDate>,
    pub values: BTreeMap<String, Vec<Option<f64>>>,
}

/// Resolves the configured columns against a file header.
///
/// Returns the index of the date column and `(index, name)` for every value
/// column, in header order when no value columns were requested.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] for the first requested column that is
/// absent from `headers`.
pub(crate) fn select_columns(
    headers: &[&str],
    config: &ReaderConfig,
    path: &Path,
) -> Result<(usize, Vec<(usize, String)>), IoError> {
    let position = |name: &str| {
        headers
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })
    };

    let date_idx = position(&config.date_column)?;
    let values = if config.value_columns.is_empty() {
        headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != date_idx)
            .map(|(i, h)| (i, (*h).to_string()))
            .collect()
    } else {
        config
            .value_columns
            .iter()
            .map(|name| Ok((position(name)?, name.clone())))
            .collect::<Result<Vec<_>, IoError>>()?
    };
    Ok((date_idx, values))
}

/// Read one [`Series`] per value column from a Parquet or CSV file.
///
/// The format is chosen by extension (`.parquet`/`.pq` or `.csv`, case
/// insensitive). Null and NaN cells become missing values; the date column
/// must be fully populated.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::UnsupportedFormat`],
/// [`IoError::MissingColumn`], a parse error for unreadable cells, or
/// [`IoError::Seasonal`] if a column contains duplicate dates or infinite
/// values.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<BTreeMap<String, Series>, IoError> {
    config.validate()?;
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let raw = match ext.as_deref() {
        Some("parquet" | "pq") => parquet_read::read_columns(path, config)?,
        Some("csv") => csv_read::read_columns(path, config)?,
        _ => {
            return Err(IoError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    debug!(n_rows = raw.dates.len(), "columns extracted");

    let mut out = BTreeMap::new();
    for (name, values) in raw.values {
        let series = Series::from_columns(&raw.dates, &values)?;
        out.insert(name, series);
    }

    info!(
        n_rows = raw.dates.len(),
        n_series = out.len(),
        "series read"
    );
    Ok(out)
}
