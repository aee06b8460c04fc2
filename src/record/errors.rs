//! # Record Errors

use thiserror::Error;

use crate::value::ValueType;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Cannot compare a Record with a value of type {found}")]
    ComparisonType { found: String },

    #[error("Record has no field named {0}")]
    UnknownField(String),

    #[error("Record index {index} out of range for {len} values")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Field {field} expected {expected}, got {found}")]
    FieldType {
        field: String,
        expected: ValueType,
        found: ValueType,
    },
}
