//! High-level Parquet writer configuration and orchestration.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::RecordBatch;
use arrow::datatypes::Schema;
use parquet::file::properties::WriterProperties;
use seasonkit_seasonal::{AlignedTable, GregorianTable, MonthlyPivot, Series};
use tracing::info;

use crate::error::IoError;
use crate::parquet_write;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing seasonal tables to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the maximum number of rows per row group.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn properties(&self) -> Result<WriterProperties, IoError> {
        self.validate()?;
        Ok(WriterProperties::builder()
            .set_compression(self.compression.to_parquet()?)
            .set_max_row_group_size(self.row_group_size)
            .build())
    }
}

fn finish(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    config: &WriterConfig,
    kind: &str,
) -> Result<(), IoError> {
    parquet_write::write_batches(path, batches, schema, config.properties()?)?;
    let n_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    info!(path = %path.display(), kind, n_rows, "parquet written");
    Ok(())
}

/// Write lunar-aligned tables to a long-format Parquet file.
///
/// Columns: `series`, `year`, `date`, `offset`, `value`. Each map entry
/// becomes one batch, labelled by its key.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`]/[`IoError::Arrow`] if batch conversion or file I/O
/// fails.
pub fn write_aligned_parquet(
    path: &Path,
    tables: &BTreeMap<String, AlignedTable>,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let schema = parquet_write::aligned_schema();
    let batches = tables
        .iter()
        .map(|(name, t)| parquet_write::aligned_to_record_batch(name, t, &schema))
        .collect::<Result<Vec<_>, _>>()?;
    finish(path, &batches, &schema, config, "aligned")
}

/// Write gregorian tables to a long-format Parquet file.
///
/// Columns: `series`, `year`, `month`, `date`, `value`.
///
/// # Errors
///
/// See [`write_aligned_parquet`].
pub fn write_gregorian_parquet(
    path: &Path,
    tables: &BTreeMap<String, GregorianTable>,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let schema = parquet_write::gregorian_schema();
    let batches = tables
        .iter()
        .map(|(name, t)| parquet_write::gregorian_to_record_batch(name, t, &schema))
        .collect::<Result<Vec<_>, _>>()?;
    finish(path, &batches, &schema, config, "gregorian")
}

/// Write monthly pivots to a long-format Parquet file.
///
/// Columns: `series`, `month`, `year`, `value`; one row per pivot cell.
///
/// # Errors
///
/// See [`write_aligned_parquet`].
pub fn write_pivot_parquet(
    path: &Path,
    pivots: &BTreeMap<String, MonthlyPivot>,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let schema = parquet_write::pivot_schema();
    let batches = pivots
        .iter()
        .map(|(name, p)| parquet_write::pivot_to_record_batch(name, p, &schema))
        .collect::<Result<Vec<_>, _>>()?;
    finish(path, &batches, &schema, config, "pivot")
}

/// Write series side by side to a wide Parquet file readable by
/// [`read_series`](crate::read_series).
///
/// Columns: `date`, then one nullable column per map key.
///
/// # Errors
///
/// See [`write_aligned_parquet`].
pub fn write_series_parquet(
    path: &Path,
    series: &BTreeMap<String, Series>,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let schema = parquet_write::series_schema(series.keys().map(String::as_str));
    let batch = parquet_write::series_to_record_batch(series, &schema)?;
    finish(path, &[batch], &schema, config, "series")
}
