//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::compute::{can_cast_types, cast};
use arrow::datatypes::{DataType, Date32Type, Float64Type, SchemaRef};
use arrow::util::display::array_value_to_string;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::reader::{RawColumns, ReaderConfig, select_columns};

/// Reads the schema and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> = reader.collect::<Result<Vec<_>, _>>()?;

    Ok((schema, batches))
}

/// Extracts the configured date and value columns from a Parquet file.
pub(crate) fn read_columns(path: &Path, config: &ReaderConfig) -> Result<RawColumns, IoError> {
    let (schema, batches) = read_batches(path)?;

    let headers: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let (date_idx, value_cols) = select_columns(&headers, config, path)?;

    let mut raw = RawColumns::default();
    for (_, name) in &value_cols {
        raw.values.insert(name.clone(), Vec::new());
    }

    for batch in &batches {
        let row_offset = raw.dates.len();
        raw.dates
            .extend(date_values(batch.column(date_idx), config.date_column(), row_offset)?);
        for (idx, name) in &value_cols {
            let values = float_values(batch.column(*idx), name)?;
            if let Some(column) = raw.values.get_mut(name) {
                column.extend(values);
            }
        }
    }

    Ok(raw)
}

/// Converts a date-like column to calendar dates.
///
/// Accepts `Date32`, `Date64`, `Timestamp` of any unit, and UTF-8
/// `YYYY-MM-DD` strings.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedColumnType`] for any other type and
/// [`IoError::InvalidDate`] for null or unparseable cells.
pub(crate) fn date_values(
    array: &ArrayRef,
    name: &str,
    row_offset: usize,
) -> Result<Vec<NaiveDate>, IoError> {
    let supported = matches!(
        array.data_type(),
        DataType::Date32
            | DataType::Date64
            | DataType::Timestamp(_, _)
            | DataType::Utf8
            | DataType::LargeUtf8
    );
    if !supported {
        return Err(IoError::UnsupportedColumnType {
            name: name.to_string(),
            data_type: array.data_type().to_string(),
        });
    }

    let dates = cast(array, &DataType::Date32)?;
    let dates = dates.as_primitive::<Date32Type>();

    (0..dates.len())
        .map(|i| {
            let parsed = if dates.is_null(i) {
                None
            } else {
                dates.value_as_date(i)
            };
            parsed.ok_or_else(|| IoError::InvalidDate {
                column: name.to_string(),
                row: row_offset + i,
                text: if array.is_null(i) {
                    String::new()
                } else {
                    array_value_to_string(array, i).unwrap_or_default()
                },
            })
        })
        .collect()
}

/// Converts a numeric column to nullable `f64` values.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedColumnType`] for non-numeric columns.
pub(crate) fn float_values(array: &ArrayRef, name: &str) -> Result<Vec<Option<f64>>, IoError> {
    let data_type = array.data_type();
    let numeric = data_type.is_numeric() || *data_type == DataType::Null;
    if !numeric || !can_cast_types(data_type, &DataType::Float64) {
        return Err(IoError::UnsupportedColumnType {
            name: name.to_string(),
            data_type: data_type.to_string(),
        });
    }

    let values = cast(array, &DataType::Float64)?;
    Ok(values.as_primitive::<Float64Type>().iter().collect())
}
