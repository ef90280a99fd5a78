//! # seasonkit-io
//!
//! Read date-indexed series from Parquet or CSV files and write seasonal
//! tables to Parquet. Columns are addressed by name; every value column
//! becomes one [`seasonkit_seasonal::Series`].

mod csv_read;
mod error;
mod parquet_read;
mod parquet_write;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_series};
pub use writer::{
    Compression, WriterConfig, write_aligned_parquet, write_gregorian_parquet,
    write_pivot_parquet, write_series_parquet,
};
