//! # Frame Errors

use thiserror::Error;

use crate::value::ValueType;

/// Result type for frame construction
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised while building a [`DataFrame`](super::DataFrame)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{labels} column labels given for {width} columns")]
    LabelCountMismatch { labels: usize, width: usize },

    #[error("Column {column} is declared {expected} but holds a {found} value")]
    MixedColumnTypes {
        column: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Column {column} has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Positional table has label {label} at position {position}")]
    PositionalLabel { position: usize, label: String },

    #[error("Duplicate column label: {0}")]
    DuplicateColumn(String),

    #[error("Invalid table JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FrameError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
