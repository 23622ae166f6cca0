//! Defines the crate level error type.

/// The broad category of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text could not be turned into records.
    Parse,
    /// The records are valid but cannot support the requested view.
    Data,
    /// The dataset could not be read at all.
    Load,
    /// Configuration could not be read or the output could not be written.
    Config,
}

/// The errors that may occur while loading the dataset and computing chart geometry.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The CSV had issues that prevented it from being read, e.g. an
    /// unterminated quote or a row with the wrong number of fields.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// The header row does not contain a required column.
    #[error("the CSV header is missing the column \"{0}\"")]
    MissingColumn(String),

    /// A date field was not in the `YYYY-MM-DD` format.
    ///
    /// `row` is the zero-based data row, not counting the header.
    #[error("could not parse '{value}' as a date on row {row}")]
    InvalidDate {
        /// The zero-based data row.
        row: usize,
        /// The offending field.
        value: String,
    },

    /// An amount field was not a non-negative integer after removing
    /// thousands separators.
    #[error("could not parse '{value}' as an amount on row {row}")]
    InvalidAmount {
        /// The zero-based data row.
        row: usize,
        /// The offending field.
        value: String,
    },

    /// A date occurs on more than one row.
    #[error("the date '{value}' on row {row} already appeared on an earlier row")]
    DuplicateDate {
        /// The zero-based data row of the repeat.
        row: usize,
        /// The repeated date field.
        value: String,
    },

    /// There are no records to compute a maximum from.
    ///
    /// A zero maximum collapses every scale into a single value, so callers
    /// must decide what to show instead.
    #[error("the dataset does not contain any records")]
    EmptyDataset,

    /// The selected year does not occur in the dataset.
    #[error("there is no data for the year {0}")]
    UnknownYear(i32),

    /// The dataset file could not be read.
    #[error("could not load the dataset: {0}")]
    LoadFailed(String),

    /// The chart configuration is invalid or could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl Error {
    /// Classify the error as a parse, data, load or config error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCSV(_)
            | Error::MissingColumn(_)
            | Error::InvalidDate { .. }
            | Error::InvalidAmount { .. }
            | Error::DuplicateDate { .. } => ErrorKind::Parse,
            Error::EmptyDataset | Error::UnknownYear(_) => ErrorKind::Data,
            Error::LoadFailed(_) => ErrorKind::Load,
            Error::InvalidConfig(_) | Error::JSONSerializationError(_) => ErrorKind::Config,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::InvalidCSV(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}
