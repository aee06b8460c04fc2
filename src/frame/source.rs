//! Tabular source interface

use crate::value::{Value, ValueType};

use super::{ColumnIndex, ColumnLabel};

/// Narrow interface to a column-oriented table.
///
/// Tables are owned by the caller; implementations are not required to copy
/// data on read.
pub trait TabularSource {
    /// Returns the column index, named or positional
    fn column_index(&self) -> ColumnIndex;

    /// Returns every column label with its type, in column order
    fn dtypes(&self) -> Vec<(ColumnLabel, ValueType)>;

    /// Returns the number of rows
    fn n_rows(&self) -> usize;

    /// Returns the row at `position` in column order, `None` when out of range
    fn row_values(&self, position: usize) -> Option<Vec<Value>>;

    /// Returns the row at `position` keyed by column label
    fn row_mapping(&self, position: usize) -> Option<Vec<(ColumnLabel, Value)>> {
        let values = self.row_values(position)?;
        Some(self.column_index().labels().into_iter().zip(values).collect())
    }

    /// Builds a table with zero rows and the given named, typed columns
    fn empty_with_columns(columns: &[(String, ValueType)]) -> Self
    where
        Self: Sized;
}
