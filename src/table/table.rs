//! Table wrapper and row projection

use crate::frame::{Column, DataFrame, TabularSource};
use crate::observability::{log_event_with_fields, Event};
use crate::record::Record;

use super::errors::{TableError, TableResult};
use super::identifier::validate_column_labels;

/// A table whose rows are read as [`Record`]s.
///
/// The source is owned, never copied on read. Callers must not mutate it
/// behind the wrapper's back; swap it with [`Table::replace`] instead.
#[derive(Debug, Clone)]
pub struct Table<S: TabularSource = DataFrame> {
    source: S,
}

impl<S: TabularSource> Table<S> {
    /// Binds a source, validating its column labels.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidIdentifier` listing every illegal label.
    pub fn new(source: S) -> TableResult<Self> {
        validate_column_labels(&source)?;
        log_bound(Event::TableBound, &source);
        Ok(Self { source })
    }

    /// Replaces the bound source and returns the previous one.
    ///
    /// The new source is validated first; on failure the old source stays
    /// bound.
    pub fn replace(&mut self, source: S) -> TableResult<S> {
        validate_column_labels(&source)?;
        log_bound(Event::TableReplaced, &source);
        Ok(std::mem::replace(&mut self.source, source))
    }

    /// Projects the row at `position` into a record.
    ///
    /// Named columns give named fields, otherwise the record is positional.
    pub fn row_at(&self, position: usize) -> TableResult<Record> {
        let out_of_bounds = || TableError::RowOutOfBounds {
            position,
            len: self.len(),
        };

        if self.source.column_index().is_named() {
            let mapping = self.source.row_mapping(position).ok_or_else(out_of_bounds)?;
            Ok(Record::from_fields(
                mapping
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value)),
            ))
        } else {
            let values = self.source.row_values(position).ok_or_else(out_of_bounds)?;
            Ok(Record::new(values))
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.source.n_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all rows in order
    pub fn iter(&self) -> Rows<'_, S> {
        Rows {
            table: self,
            position: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl Table<DataFrame> {
    /// Returns a whole column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.source.column_by_name(name)
    }
}

fn log_bound<S: TabularSource>(event: Event, source: &S) {
    let rows = source.n_rows().to_string();
    let columns = source.column_index().len().to_string();
    log_event_with_fields(event, &[("columns", columns.as_str()), ("rows", rows.as_str())]);
}

/// Iterator over the records of a [`Table`]
pub struct Rows<'a, S: TabularSource> {
    table: &'a Table<S>,
    position: usize,
}

impl<S: TabularSource> Iterator for Rows<'_, S> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let record = self.table.row_at(self.position).ok()?;
        self.position += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a, S: TabularSource> IntoIterator for &'a Table<S> {
    type Item = Record;
    type IntoIter = Rows<'a, S>;

    fn into_iter(self) -> Rows<'a, S> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ColumnLabel;
    use crate::value::Value;

    fn length_3_frame() -> DataFrame {
        DataFrame::from_rows(vec![
            vec![Value::Int(10)],
            vec![Value::Int(20)],
            vec![Value::Int(30)],
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_table_from_empty_frame() {
        let table = Table::new(DataFrame::empty()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_nonempty_table() {
        let table = Table::new(DataFrame::from_rows(vec![vec![Value::Int(1)]]).unwrap()).unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_table_keeps_length() {
        let table = Table::new(length_3_frame()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_row_at_is_positional_record() {
        let table = Table::new(length_3_frame()).unwrap();
        assert_eq!(table.row_at(2).unwrap(), Record::new([30]));
        assert_eq!(table.row_at(0).unwrap(), Record::new([10]));
    }

    #[test]
    fn test_row_out_of_bounds() {
        let table = Table::new(length_3_frame()).unwrap();
        assert_eq!(
            table.row_at(3),
            Err(TableError::RowOutOfBounds { position: 3, len: 3 })
        );
    }

    #[test]
    fn test_iteration_preserves_row_order() {
        let table = Table::new(length_3_frame()).unwrap();
        let records: Vec<Record> = table.iter().collect();
        assert_eq!(
            records,
            vec![Record::new([10]), Record::new([20]), Record::new([30])]
        );
        assert_eq!(table.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_multiple_columns() {
        let frame = DataFrame::from_rows(vec![
            vec![Value::Int(1), Value::Int(10)],
            vec![Value::Int(2), Value::Int(20)],
            vec![Value::Int(3), Value::Int(30)],
        ])
        .unwrap();
        let table = Table::new(frame).unwrap();
        assert_eq!(table.row_at(1).unwrap(), Record::new([2, 20]));
    }

    #[test]
    fn test_named_column_becomes_field() {
        let frame = DataFrame::with_labels(vec!["one_value".into()], vec![vec![Value::Int(1)]]).unwrap();
        let table = Table::new(frame).unwrap();
        let record = table.row_at(0).unwrap();
        assert_eq!(record["one_value"], Value::Int(1));
    }

    #[test]
    fn test_column_access_by_name() {
        let frame = DataFrame::with_labels(
            vec!["one_value".into()],
            vec![vec![Value::Int(1)], vec![Value::Int(2)], vec![Value::Int(3)]],
        )
        .unwrap();
        let table = Table::new(frame).unwrap();
        let column = table.column("one_value").unwrap();
        assert_eq!(column.values(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn test_names_with_spaces_rejected() {
        let frame = DataFrame::with_labels(vec!["a b".into()], vec![vec![Value::Int(1)]]).unwrap();
        let err = Table::new(frame).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"a b\" not allowed as column name(s): invalid identifier(s)"
        );
    }

    #[test]
    fn test_names_with_spaces_or_numbers_rejected() {
        let frame = DataFrame::with_labels(
            vec!["a b".into(), ColumnLabel::Position(0)],
            vec![vec![Value::Int(1), Value::Int(2)]],
        )
        .unwrap();
        let err = Table::new(frame).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"0\", \"a b\" not allowed as column name(s): invalid identifier(s)"
        );
    }

    #[test]
    fn test_failed_replace_keeps_old_source() {
        let mut table = Table::new(length_3_frame()).unwrap();
        let bad = DataFrame::with_labels(vec!["a b".into()], vec![vec![Value::Int(1)]]).unwrap();
        assert!(table.replace(bad).is_err());
        assert_eq!(table.len(), 3);

        let good = DataFrame::with_labels(vec!["x".into()], vec![vec![Value::Int(5)]]).unwrap();
        let old = table.replace(good).unwrap();
        assert_eq!(old.n_rows(), 3);
        assert_eq!(table.row_at(0).unwrap(), Record::from_fields([("x", 5)]));
    }
}
