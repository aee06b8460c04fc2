//! Record value type

use std::any::{type_name, Any};
use std::fmt;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use crate::value::Value;

use super::errors::{RecordError, RecordResult};

/// One row projected out of a table.
///
/// Positional values keep their column order. Named fields are kept in the
/// order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: Vec<Value>,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a record from positional values
    pub fn new(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            fields: Vec::new(),
        }
    }

    /// Creates a record from named values
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::with_fields(Vec::<Value>::new(), fields)
    }

    /// Creates a record holding both positional and named values
    pub fn with_fields<K, V>(
        values: impl IntoIterator<Item = impl Into<Value>>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the positional value at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the positional value at `index` or an error naming the bounds
    pub fn try_get(&self, index: usize) -> RecordResult<&Value> {
        self.values.get(index).ok_or(RecordError::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Returns the named field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the named field value or [`RecordError::UnknownField`]
    pub fn try_field(&self, name: &str) -> RecordResult<&Value> {
        self.field(name)
            .ok_or_else(|| RecordError::UnknownField(name.to_string()))
    }

    /// All positional values, in original order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// All named fields, in original order
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of positional values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.fields.is_empty()
    }

    /// Compares against a value of any type.
    ///
    /// Comparing with anything but a `Record` is an error, not `false`.
    pub fn try_eq<T: Any>(&self, other: &T) -> RecordResult<bool> {
        match (other as &dyn Any).downcast_ref::<Record>() {
            Some(record) => Ok(self == record),
            None => Err(RecordError::ComparisonType {
                found: type_name::<T>().to_string(),
            }),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.fields == other.fields
    }
}

impl Index<usize> for Record {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl Index<RangeFull> for Record {
    type Output = [Value];

    fn index(&self, _: RangeFull) -> &[Value] {
        &self.values
    }
}

impl Index<Range<usize>> for Record {
    type Output = [Value];

    fn index(&self, range: Range<usize>) -> &[Value] {
        &self.values[range]
    }
}

impl Index<RangeFrom<usize>> for Record {
    type Output = [Value];

    fn index(&self, range: RangeFrom<usize>) -> &[Value] {
        &self.values[range]
    }
}

impl Index<RangeTo<usize>> for Record {
    type Output = [Value];

    fn index(&self, range: RangeTo<usize>) -> &[Value] {
        &self.values[range]
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// Named field access; panics on an unknown name like slice indexing does
    fn index(&self, name: &str) -> &Value {
        match self.field(name) {
            Some(value) => value,
            None => panic!("Record has no field named {}", name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(")?;
        let positional = self.values.iter().map(|v| v.to_string());
        let named = self.fields.iter().map(|(k, v)| format!("{}={}", k, v));
        let parts: Vec<String> = positional.chain(named).collect();
        write!(f, "{})", parts.join(", "))
    }
}
