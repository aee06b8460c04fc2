//! # Schema Errors

use thiserror::Error;

/// Result type for schema declaration
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while declaring a [`RecordSchema`](super::RecordSchema)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Record type {record} declares field {field} more than once")]
    DuplicateField { record: String, field: String },

    #[error("Record type {record} declares field \"{field}\" which is not a valid identifier")]
    InvalidFieldName { record: String, field: String },
}
