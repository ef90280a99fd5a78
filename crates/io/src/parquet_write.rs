//! Low-level Parquet column building.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Date32Array, Float64Array, Int32Array, Int64Array, RecordBatch, StringArray,
    UInt8Array,
};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use seasonkit_seasonal::{AlignedTable, GregorianTable, MonthlyPivot, Series};

use crate::error::IoError;

fn series_field() -> Field {
    Field::new("series", DataType::Utf8, false)
}

fn value_field() -> Field {
    Field::new("value", DataType::Float64, true)
}

fn date_array(dates: impl IntoIterator<Item = NaiveDate>) -> ArrayRef {
    Arc::new(Date32Array::from_iter_values(
        dates.into_iter().map(Date32Type::from_naive_date),
    ))
}

fn name_array(name: &str, n: usize) -> ArrayRef {
    Arc::new(StringArray::from(vec![name; n]))
}

/// Schema of the long-format lunar output: one row per (series, year, offset).
pub(crate) fn aligned_schema() -> Schema {
    Schema::new(vec![
        series_field(),
        Field::new("year", DataType::Int32, false),
        Field::new("date", DataType::Date32, false),
        Field::new("offset", DataType::Int64, false),
        value_field(),
    ])
}

/// Schema of the long-format gregorian output: one row per (series, date).
pub(crate) fn gregorian_schema() -> Schema {
    Schema::new(vec![
        series_field(),
        Field::new("year", DataType::Int32, false),
        Field::new("month", DataType::UInt8, false),
        Field::new("date", DataType::Date32, false),
        value_field(),
    ])
}

/// Schema of the long-format pivot output: one row per (series, month, year).
pub(crate) fn pivot_schema() -> Schema {
    Schema::new(vec![
        series_field(),
        Field::new("month", DataType::UInt8, false),
        Field::new("year", DataType::Int32, false),
        value_field(),
    ])
}

/// Schema of the wide series output: a `date` column followed by one
/// nullable column per series name.
pub(crate) fn series_schema<'a>(names: impl IntoIterator<Item = &'a str>) -> Schema {
    let mut fields = vec![Field::new("date", DataType::Date32, false)];
    fields.extend(names.into_iter().map(|n| Field::new(n, DataType::Float64, true)));
    Schema::new(fields)
}

/// Converts one named [`AlignedTable`] into a [`RecordBatch`].
pub(crate) fn aligned_to_record_batch(
    name: &str,
    table: &AlignedTable,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let points = table.points();
    let columns: Vec<ArrayRef> = vec![
        name_array(name, points.len()),
        Arc::new(Int32Array::from_iter_values(points.iter().map(|p| p.year()))),
        date_array(points.iter().map(|p| p.date())),
        Arc::new(Int64Array::from_iter_values(points.iter().map(|p| p.offset()))),
        Arc::new(Float64Array::from_iter(points.iter().map(|p| p.value()))),
    ];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Converts one named [`GregorianTable`] into a [`RecordBatch`].
pub(crate) fn gregorian_to_record_batch(
    name: &str,
    table: &GregorianTable,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let points = table.points();
    let columns: Vec<ArrayRef> = vec![
        name_array(name, points.len()),
        Arc::new(Int32Array::from_iter_values(points.iter().map(|p| p.year()))),
        Arc::new(UInt8Array::from_iter_values(points.iter().map(|p| p.month() as u8))),
        date_array(points.iter().map(|p| p.date())),
        Arc::new(Float64Array::from_iter(points.iter().map(|p| p.value()))),
    ];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Converts one named [`MonthlyPivot`] into a [`RecordBatch`], month-major.
pub(crate) fn pivot_to_record_batch(
    name: &str,
    pivot: &MonthlyPivot,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let cells: Vec<(u32, i32)> = pivot
        .months()
        .iter()
        .flat_map(|&m| pivot.years().iter().map(move |&y| (m, y)))
        .collect();
    let columns: Vec<ArrayRef> = vec![
        name_array(name, cells.len()),
        Arc::new(UInt8Array::from_iter_values(cells.iter().map(|&(m, _)| m as u8))),
        Arc::new(Int32Array::from_iter_values(cells.iter().map(|&(_, y)| y))),
        Arc::new(Float64Array::from_iter(
            cells.iter().map(|&(m, y)| pivot.value(m, y)),
        )),
    ];
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Converts several series into one wide [`RecordBatch`] on the union of
/// their dates. Cells where a series has no observation are null.
pub(crate) fn series_to_record_batch(
    series: &BTreeMap<String, Series>,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let mut dates: Vec<NaiveDate> = series.values().flat_map(|s| s.dates()).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut columns: Vec<ArrayRef> = vec![date_array(dates.iter().copied())];
    for s in series.values() {
        columns.push(Arc::new(Float64Array::from_iter(
            dates.iter().map(|&d| s.value_at(d)),
        )));
    }
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
