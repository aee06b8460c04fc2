//! Tables bound to a runtime record schema

use crate::frame::{DataFrame, TabularSource};
use crate::observability::{log_event_with_fields, Event};
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::table::{Rows, Table};

use super::errors::TemplateResult;
use super::validator::CompatibilityValidator;

/// A [`Table`] whose columns are guaranteed to satisfy a [`RecordSchema`].
///
/// Compatibility is checked when the table is bound and whenever it is
/// replaced through [`SchemaBoundTable::rebind`]; reads never re-check.
#[derive(Debug, Clone)]
pub struct SchemaBoundTable<S: TabularSource = DataFrame> {
    schema: RecordSchema,
    table: Table<S>,
}

impl<S: TabularSource> SchemaBoundTable<S> {
    /// Binds `schema` to `source`, or to a generated empty table when no
    /// source is given.
    pub fn new(schema: RecordSchema, source: Option<S>) -> TemplateResult<Self> {
        match source {
            Some(source) => Self::bind(schema, source),
            None => Self::generate(schema),
        }
    }

    /// Generates an empty table whose columns are exactly the schema
    /// fields, name-sorted, with their declared types.
    pub fn generate(schema: RecordSchema) -> TemplateResult<Self> {
        let columns: Vec<(String, _)> = schema
            .sorted_fields()
            .into_iter()
            .map(|f| (f.name.clone(), f.value_type))
            .collect();
        let table = Table::new(S::empty_with_columns(&columns))?;

        let count = columns.len().to_string();
        log_event_with_fields(
            Event::TemplateGenerated,
            &[("columns", count.as_str()), ("record", schema.name())],
        );
        Ok(Self { schema, table })
    }

    /// Validates `source` against `schema` and binds it unmodified.
    ///
    /// Extra columns are kept and stay readable.
    pub fn bind(schema: RecordSchema, source: S) -> TemplateResult<Self> {
        CompatibilityValidator::new(&schema).validate(&source)?;
        let table = Table::new(source)?;
        log_event_with_fields(Event::TemplateValidated, &[("record", schema.name())]);
        Ok(Self { schema, table })
    }

    /// Replaces the bound source and returns the previous one.
    ///
    /// The new source goes through the same checks as at construction; on
    /// failure the old source stays bound.
    pub fn rebind(&mut self, source: S) -> TemplateResult<S> {
        CompatibilityValidator::new(&self.schema).validate(&source)?;
        let previous = self.table.replace(source)?;
        log_event_with_fields(Event::TemplateValidated, &[("record", self.schema.name())]);
        Ok(previous)
    }

    /// Projects the row at `position` into a record
    pub fn row_at(&self, position: usize) -> TemplateResult<Record> {
        Ok(self.table.row_at(position)?)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> Rows<'_, S> {
        self.table.iter()
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn table(&self) -> &Table<S> {
        &self.table
    }

    pub fn into_table(self) -> Table<S> {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Column, ColumnLabel};
    use crate::observability::take_emitted;
    use crate::schema::Field;
    use crate::template::TemplateErrorCode;
    use crate::value::{Value, ValueType};

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "Reading",
            vec![
                Field::new("value", ValueType::Float64),
                Field::new("station", ValueType::Object),
            ],
        )
        .unwrap()
    }

    fn readings() -> DataFrame {
        DataFrame::from_columns(vec![
            Column::new(
                "station",
                ValueType::Object,
                vec![Value::from("north"), Value::from("south")],
            )
            .unwrap(),
            Column::new("value", ValueType::Float64, vec![Value::Float(1.5), Value::Float(2.5)])
                .unwrap(),
            Column::new("flag", ValueType::Bool, vec![Value::Bool(true), Value::Bool(false)])
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_generate_sorted_empty_columns() {
        let bound = SchemaBoundTable::<DataFrame>::new(schema(), None).unwrap();
        assert!(bound.is_empty());
        assert_eq!(
            bound.table().source().dtypes(),
            vec![
                (ColumnLabel::from("station"), ValueType::Object),
                (ColumnLabel::from("value"), ValueType::Float64),
            ]
        );
    }

    #[test]
    fn test_bind_keeps_extra_columns() {
        let bound = SchemaBoundTable::new(schema(), Some(readings())).unwrap();
        assert_eq!(bound.len(), 2);
        assert!(bound.table().column("flag").is_some());

        let record = bound.row_at(1).unwrap();
        assert_eq!(record["value"], Value::Float(2.5));
        assert_eq!(record["flag"], Value::Bool(false));
    }

    #[test]
    fn test_rebind_revalidates() {
        let mut bound = SchemaBoundTable::new(schema(), Some(readings())).unwrap();

        let wrong = DataFrame::from_columns(vec![Column::empty("value", ValueType::Float64)]).unwrap();
        let err = bound.rebind(wrong).unwrap_err();
        assert_eq!(err.code(), TemplateErrorCode::SchemaMismatch);
        assert_eq!(bound.len(), 2);

        let empty = DataFrame::from_columns(vec![
            Column::empty("station", ValueType::Object),
            Column::empty("value", ValueType::Float64),
        ])
        .unwrap();
        let previous = bound.rebind(empty).unwrap();
        assert_eq!(previous.n_rows(), 2);
        assert!(bound.is_empty());
    }

    #[test]
    fn test_row_out_of_bounds() {
        let bound = SchemaBoundTable::new(schema(), Some(readings())).unwrap();
        let err = bound.row_at(9).unwrap_err();
        assert_eq!(err.code(), TemplateErrorCode::RowOutOfBounds);
    }

    #[test]
    fn test_validated_event_only_after_labels_pass() {
        let with_illegal_label = DataFrame::from_columns(vec![
            Column::empty("station", ValueType::Object),
            Column::empty("value", ValueType::Float64),
            Column::empty("bad label", ValueType::Int64),
        ])
        .unwrap();

        take_emitted();
        let err = SchemaBoundTable::new(schema(), Some(with_illegal_label)).unwrap_err();
        assert_eq!(err.code(), TemplateErrorCode::InvalidIdentifier);
        let emitted = take_emitted();
        assert!(emitted.contains(&Event::IdentifiersRejected));
        assert!(!emitted.contains(&Event::TemplateValidated));

        let mut bound = SchemaBoundTable::new(schema(), Some(readings())).unwrap();
        assert!(take_emitted().contains(&Event::TemplateValidated));

        let mismatched =
            DataFrame::from_columns(vec![Column::empty("value", ValueType::Float64)]).unwrap();
        assert!(bound.rebind(mismatched).is_err());
        let emitted = take_emitted();
        assert!(emitted.contains(&Event::SchemaMismatch));
        assert!(!emitted.contains(&Event::TemplateValidated));
    }
}
