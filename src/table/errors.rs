//! # Table Errors

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Quoted, sorted labels that are not legal identifiers
    #[error("{} not allowed as column name(s): invalid identifier(s)", .labels.join(", "))]
    InvalidIdentifier { labels: Vec<String> },

    #[error("Row {position} out of range for table of length {len}")]
    RowOutOfBounds { position: usize, len: usize },
}

impl TableError {
    /// Builds an identifier error from raw labels, quoting and sorting them
    pub fn invalid_identifier<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: std::fmt::Display,
    {
        let mut labels: Vec<String> = labels
            .into_iter()
            .map(|label| format!("\"{}\"", label))
            .collect();
        labels.sort();
        Self::InvalidIdentifier { labels }
    }
}
