//! Export error types.

use thiserror::Error;

/// Errors raised while building or writing an export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// A quantity column does not have one value per time point.
    #[error("column {label} has {got} values, expected {expected}")]
    ColumnLength {
        label: String,
        expected: usize,
        got: usize,
    },

    /// CSV encoding failure.
    #[error("csv: {0}")]
    Csv(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
