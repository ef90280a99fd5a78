//! Integration test: seasonal tables written to Parquet.

use std::collections::BTreeMap;
use std::path::Path;

use approx::assert_relative_eq;
use arrow::array::{AsArray, RecordBatch};
use arrow::datatypes::{Float64Type, Int32Type, Int64Type, UInt8Type};
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use seasonkit_calendar::{AnchorTable, OffsetWindow};
use seasonkit_io::{
    WriterConfig, write_aligned_parquet, write_gregorian_parquet, write_pivot_parquet,
};
use seasonkit_seasonal::{Series, UnmappedYearPolicy, align, gregorian_points, monthly_pivot};

fn read_back(path: &Path) -> Vec<RecordBatch> {
    let file = std::fs::File::open(path).expect("open parquet");
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).expect("reader builder");
    let reader = builder.build().expect("build reader");
    reader.collect::<Result<Vec<_>, _>>().expect("read batches")
}

fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect()
}

fn sample() -> Series {
    let dates = [
        NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 25).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
    ];
    Series::from_columns(&dates, &[Some(8.0), Some(10.0), Some(5.0)]).unwrap()
}

#[test]
fn aligned_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("aligned.parquet");

    let table = align(
        &sample(),
        AnchorTable::lunar_new_year(),
        OffsetWindow::new(-7, 7).unwrap(),
        UnmappedYearPolicy::Drop,
    )
    .unwrap();
    let mut tables = BTreeMap::new();
    tables.insert("coal".to_string(), table);
    write_aligned_parquet(&path, &tables, &WriterConfig::default()).expect("write succeeds");

    let batches = read_back(&path);
    assert_eq!(
        column_names(&batches[0]),
        vec!["series", "year", "date", "offset", "value"]
    );
    let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(total_rows, 30);

    let batch = &batches[0];
    let years = batch.column(1).as_primitive::<Int32Type>();
    let offsets = batch.column(3).as_primitive::<Int64Type>();
    let values = batch.column(4).as_primitive::<Float64Type>();
    let row = (0..batch.num_rows())
        .find(|&i| years.value(i) == 2023 && offsets.value(i) == 0)
        .expect("2023 anchor row");
    assert_relative_eq!(values.value(row), 8.8, epsilon = 1e-9);
}

#[test]
fn gregorian_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gregorian.parquet");

    let mut tables = BTreeMap::new();
    tables.insert("coal".to_string(), gregorian_points(&sample()));
    write_gregorian_parquet(&path, &tables, &WriterConfig::default()).expect("write succeeds");

    let batches = read_back(&path);
    assert_eq!(
        column_names(&batches[0]),
        vec!["series", "year", "month", "date", "value"]
    );
    let months = batches[0].column(2).as_primitive::<UInt8Type>();
    assert_eq!(months.values().to_vec(), vec![1, 1, 2]);
}

#[test]
fn pivot_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("pivot.parquet");

    let mut pivots = BTreeMap::new();
    pivots.insert("coal".to_string(), monthly_pivot(&sample()));
    write_pivot_parquet(&path, &pivots, &WriterConfig::default()).expect("write succeeds");

    let batches = read_back(&path);
    assert_eq!(
        column_names(&batches[0]),
        vec!["series", "month", "year", "value"]
    );
    // months {1, 2} x years {2023, 2024}
    assert_eq!(batches[0].num_rows(), 4);
    let values = batches[0].column(3).as_primitive::<Float64Type>();
    assert_relative_eq!(values.value(0), 9.0);
}
