//! Table/schema compatibility validation
//!
//! Validation semantics:
//! - Every schema field has a column of the same name
//! - Every such column has exactly the declared type
//! - Extra columns are allowed and left untouched
//!
//! Names are checked before types, so a table violating both reports the
//! missing names. No column is ever cast to the declared type.

use std::collections::BTreeMap;

use crate::frame::TabularSource;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::RecordSchema;

use super::errors::{MismatchDetails, TemplateError, TemplateResult};

/// Validates tables against a record schema.
///
/// Validation is deterministic and never mutates the table.
pub struct CompatibilityValidator<'a> {
    schema: &'a RecordSchema,
}

impl<'a> CompatibilityValidator<'a> {
    pub fn new(schema: &'a RecordSchema) -> Self {
        Self { schema }
    }

    /// Validates that `source` satisfies the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if a field has no column, or if a field's
    /// column has a different type.
    pub fn validate<S: TabularSource>(&self, source: &S) -> TemplateResult<()> {
        let columns: BTreeMap<String, &'static str> = source
            .dtypes()
            .into_iter()
            .map(|(label, dtype)| (label.to_string(), dtype.type_name()))
            .collect();

        let result = self
            .check_names(&columns)
            .and_then(|_| self.check_types(&columns));

        if let Err(e) = &result {
            log_event_with_fields(
                Event::SchemaMismatch,
                &[("record", self.schema.name()), ("message", e.message())],
            );
        }
        result
    }

    /// Every schema field must name a column.
    fn check_names(&self, columns: &BTreeMap<String, &'static str>) -> TemplateResult<()> {
        let missing: Vec<String> = self
            .schema
            .field_names_sorted()
            .into_iter()
            .filter(|name| !columns.contains_key(*name))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let table_names: Vec<&str> = columns.keys().map(String::as_str).collect();
        let message = format!(
            "columns are {} and they should match {} arguments {}",
            format_list(&table_names),
            self.schema.name(),
            format_list(&self.schema.field_names_sorted()),
        );
        Err(TemplateError::schema_mismatch(
            self.schema.name(),
            message,
            MismatchDetails {
                missing,
                mistyped: Vec::new(),
            },
        ))
    }

    /// Every field's column must carry exactly the declared type.
    fn check_types(&self, columns: &BTreeMap<String, &'static str>) -> TemplateResult<()> {
        let mistyped: Vec<String> = self
            .schema
            .sorted_fields()
            .into_iter()
            .filter(|field| columns.get(&field.name) != Some(&field.value_type.type_name()))
            .map(|field| field.name.clone())
            .collect();

        if mistyped.is_empty() {
            return Ok(());
        }

        let table_types: Vec<(&str, &str)> =
            columns.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let schema_types: Vec<(&str, &str)> = self
            .schema
            .sorted_fields()
            .into_iter()
            .map(|f| (f.name.as_str(), f.value_type.type_name()))
            .collect();
        let message = format!(
            "columns types are {} and they should match {} arguments {}",
            format_map(&table_types),
            self.schema.name(),
            format_map(&schema_types),
        );
        Err(TemplateError::schema_mismatch(
            self.schema.name(),
            message,
            MismatchDetails {
                missing: Vec::new(),
                mistyped,
            },
        ))
    }
}

/// Formats names as `["a", "b"]`.
fn format_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{}\"", s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Formats pairs as `{"a": "int64", "b": "float64"}`.
fn format_map(pairs: &[(&str, &str)]) -> String {
    let entries: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("\"{}\": \"{}\"", k, v))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Column, DataFrame};
    use crate::schema::Field;
    use crate::template::TemplateErrorCode;
    use crate::value::{Value, ValueType};

    fn point_schema() -> RecordSchema {
        RecordSchema::new(
            "CustomPoint",
            vec![
                Field::new("my_argument", ValueType::Int64),
                Field::new("another_argument", ValueType::Float64),
            ],
        )
        .unwrap()
    }

    fn frame(columns: &[(&str, ValueType)]) -> DataFrame {
        DataFrame::from_columns(
            columns
                .iter()
                .map(|(name, dtype)| Column::empty(*name, *dtype))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_passes() {
        let schema = point_schema();
        let validator = CompatibilityValidator::new(&schema);
        let table = frame(&[
            ("my_argument", ValueType::Int64),
            ("another_argument", ValueType::Float64),
        ]);
        assert!(validator.validate(&table).is_ok());
    }

    #[test]
    fn test_superset_passes() {
        let schema = point_schema();
        let validator = CompatibilityValidator::new(&schema);
        let table = frame(&[
            ("my_argument", ValueType::Int64),
            ("another_argument", ValueType::Float64),
            ("extra", ValueType::Object),
        ]);
        assert!(validator.validate(&table).is_ok());
    }

    #[test]
    fn test_missing_column_message() {
        let schema = point_schema();
        let validator = CompatibilityValidator::new(&schema);
        let table = frame(&[("zzz", ValueType::Int64), ("my_argument", ValueType::Int64)]);

        let err = validator.validate(&table).unwrap_err();
        assert_eq!(err.code(), TemplateErrorCode::SchemaMismatch);
        assert_eq!(
            err.message(),
            "columns are [\"my_argument\", \"zzz\"] and they should match CustomPoint \
             arguments [\"another_argument\", \"my_argument\"]"
        );
        assert_eq!(err.details().unwrap().missing, vec!["another_argument".to_string()]);
    }

    #[test]
    fn test_type_mismatch_lists_every_column_type() {
        let schema = point_schema();
        let validator = CompatibilityValidator::new(&schema);
        let table = frame(&[
            ("my_argument", ValueType::Float64),
            ("another_argument", ValueType::Float64),
            ("extra", ValueType::Bool),
        ]);

        let err = validator.validate(&table).unwrap_err();
        assert_eq!(
            err.message(),
            "columns types are {\"another_argument\": \"float64\", \"extra\": \"bool\", \
             \"my_argument\": \"float64\"} and they should match CustomPoint arguments \
             {\"another_argument\": \"float64\", \"my_argument\": \"int64\"}"
        );
        assert_eq!(err.details().unwrap().mistyped, vec!["my_argument".to_string()]);
    }

    #[test]
    fn test_names_checked_before_types() {
        let schema = point_schema();
        let validator = CompatibilityValidator::new(&schema);
        let table = frame(&[("my_argument", ValueType::Object)]);

        let err = validator.validate(&table).unwrap_err();
        assert!(err.message().starts_with("columns are "));
    }

    #[test]
    fn test_no_coercion_of_int_values_into_float_column() {
        let schema = RecordSchema::new("P", vec![Field::new("x", ValueType::Float64)]).unwrap();
        let validator = CompatibilityValidator::new(&schema);
        let table = DataFrame::with_labels(vec!["x".into()], vec![vec![Value::Int(1)]]).unwrap();
        assert!(validator.validate(&table).is_err());
    }
}
