//! Error types for seasonkit-io.

use std::path::PathBuf;

use seasonkit_seasonal::SeasonalError;

/// Error type for all fallible operations in the seasonkit-io crate.
///
/// Covers missing files and columns, format-specific failures from Parquet,
/// Arrow and CSV, unparseable cells, and invalid series data.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the file extension is neither `.parquet` nor `.csv`.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat {
        /// Path whose extension was not recognised.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet library.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Wraps an error originating from the Arrow library.
    #[error("arrow error: {reason}")]
    Arrow {
        /// Description of the underlying Arrow failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a requested column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column's type cannot be read as dates or numbers.
    #[error("column '{name}' has unsupported type {data_type}")]
    UnsupportedColumnType {
        /// Name of the column.
        name: String,
        /// Arrow type of the column.
        data_type: String,
    },

    /// Returned when a date cell is null or cannot be parsed.
    #[error("invalid date in column '{column}' at row {row}: {text:?}")]
    InvalidDate {
        /// Name of the date column.
        column: String,
        /// Zero-based data row.
        row: usize,
        /// Raw cell text, empty for nulls.
        text: String,
    },

    /// Returned when a value cell cannot be parsed as a number.
    #[error("invalid value in column '{column}' at row {row}: {text:?}")]
    InvalidValue {
        /// Name of the value column.
        column: String,
        /// Zero-based data row.
        row: usize,
        /// Raw cell text.
        text: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// A column was read but does not form a valid series.
    #[error(transparent)]
    Seasonal(#[from] SeasonalError),
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Arrow {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.parquet"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.parquet");
    }

    #[test]
    fn display_unsupported_format() {
        let err = IoError::UnsupportedFormat {
            path: PathBuf::from("data.xlsx"),
        };
        assert_eq!(err.to_string(), "unsupported file format: data.xlsx");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "price".to_string(),
            path: PathBuf::from("/data/prices.csv"),
        };
        assert_eq!(err.to_string(), "column 'price' not found in /data/prices.csv");
    }

    #[test]
    fn display_unsupported_column_type() {
        let err = IoError::UnsupportedColumnType {
            name: "flag".to_string(),
            data_type: "Boolean".to_string(),
        };
        assert_eq!(err.to_string(), "column 'flag' has unsupported type Boolean");
    }

    #[test]
    fn display_invalid_date() {
        let err = IoError::InvalidDate {
            column: "date".to_string(),
            row: 3,
            text: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date in column 'date' at row 3: \"yesterday\""
        );
    }

    #[test]
    fn display_invalid_value() {
        let err = IoError::InvalidValue {
            column: "price".to_string(),
            row: 0,
            text: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value in column 'price' at row 0: \"abc\""
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "date_column is empty; duplicate value column 'a'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): date_column is empty; duplicate value column 'a'"
        );
    }

    #[test]
    fn from_parquet_error() {
        let pq_err = parquet::errors::ParquetError::General("test pq error".to_string());
        let err: IoError = pq_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("test pq error"));
    }

    #[test]
    fn from_arrow_error() {
        let arrow_err = arrow::error::ArrowError::CastError("bad cast".to_string());
        let err: IoError = arrow_err.into();
        assert!(matches!(err, IoError::Arrow { .. }));
        assert!(err.to_string().contains("bad cast"));
    }

    #[test]
    fn from_seasonal_error_is_transparent() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap();
        let inner = SeasonalError::DuplicateDate { date };
        let expected = inner.to_string();
        let err: IoError = inner.into();
        assert!(matches!(err, IoError::Seasonal(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
