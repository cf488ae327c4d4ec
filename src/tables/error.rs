use crate::types::frequency::Frequency;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("No 'hourly' or 'daily' data found in API response")]
    NoSections,

    #[error("Section '{section}' has no 'time' field")]
    MissingTimeColumn { section: Frequency },

    #[error("Field '{field}' in section '{section}' is not an array")]
    NotAnArray { section: Frequency, field: String },

    #[error("Field '{field}' in section '{section}' has {found} values, expected {expected}")]
    LengthMismatch {
        section: Frequency,
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Could not parse timestamp {value} in section '{section}'")]
    TimestampParse { section: Frequency, value: String },

    #[error("Required column '{0}' not found in table")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
