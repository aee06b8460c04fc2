//! Schema type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::table::is_valid_identifier;
use crate::value::ValueType;

use super::errors::{SchemaError, SchemaResult};

/// A declared record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, also the column name it binds to
    pub name: String,
    /// Declared column type
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl Field {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// Wire form of a [`RecordSchema`], validated on conversion.
#[derive(Deserialize)]
struct RawSchema {
    name: String,
    fields: Vec<Field>,
}

/// The field contract of one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchema")]
pub struct RecordSchema {
    /// Record type name, used in diagnostics
    name: String,
    /// Fields in declaration order
    fields: Vec<Field>,
}

impl TryFrom<RawSchema> for RecordSchema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> SchemaResult<Self> {
        Self::new(raw.name, raw.fields)
    }
}

impl RecordSchema {
    /// Creates a schema, rejecting duplicate or non-identifier field names
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> SchemaResult<Self> {
        let name = name.into();

        let mut seen = HashSet::new();
        for field in &fields {
            if !is_valid_identifier(&field.name) {
                return Err(SchemaError::InvalidFieldName {
                    record: name,
                    field: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    record: name,
                    field: field.name.clone(),
                });
            }
        }

        Ok(Self { name, fields })
    }

    /// Returns the record type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the fields sorted by name
    pub fn sorted_fields(&self) -> Vec<&Field> {
        let mut sorted: Vec<&Field> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Returns the field names sorted
    pub fn field_names_sorted(&self) -> Vec<&str> {
        self.sorted_fields()
            .into_iter()
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Returns a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the declared position of a field
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
