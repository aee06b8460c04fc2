//! Column type tags

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Value;

/// Primitive type tag of a column or a declared record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point
    Float64,
    /// Boolean
    Bool,
    /// UTF-8 string
    Object,
}

impl ValueType {
    /// Returns the type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueType::Int64 => "int64",
            ValueType::Float64 => "float64",
            ValueType::Bool => "bool",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Rust scalar types that can be stored in a column.
///
/// Record types declare their fields with these types; the associated
/// `VALUE_TYPE` becomes the declared column type of the field.
pub trait ColumnValue: Sized {
    /// Column type this scalar maps to
    const VALUE_TYPE: ValueType;

    /// Extracts the scalar from a cell, `None` on a type mismatch
    fn from_value(value: &Value) -> Option<Self>;

    /// Wraps the scalar into a cell
    fn into_value(self) -> Value;
}

impl ColumnValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::Int64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl ColumnValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Float64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl ColumnValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ColumnValue for String {
    const VALUE_TYPE: ValueType = ValueType::Object;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(ValueType::Int64.type_name(), "int64");
        assert_eq!(ValueType::Float64.type_name(), "float64");
        assert_eq!(ValueType::Bool.type_name(), "bool");
        assert_eq!(ValueType::Object.type_name(), "object");
    }

    #[test]
    fn test_scalar_value_types() {
        assert_eq!(<i64 as ColumnValue>::VALUE_TYPE, ValueType::Int64);
        assert_eq!(<f64 as ColumnValue>::VALUE_TYPE, ValueType::Float64);
        assert_eq!(<bool as ColumnValue>::VALUE_TYPE, ValueType::Bool);
        assert_eq!(<String as ColumnValue>::VALUE_TYPE, ValueType::Object);
    }

    #[test]
    fn test_no_coercion_between_numeric_types() {
        assert_eq!(i64::from_value(&Value::Float(1.0)), None);
        assert_eq!(f64::from_value(&Value::Int(1)), None);
        assert_eq!(i64::from_value(&Value::Int(7)), Some(7));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ValueType::Float64).unwrap();
        assert_eq!(json, "\"float64\"");
        let parsed: ValueType = serde_json::from_str("\"int64\"").unwrap();
        assert_eq!(parsed, ValueType::Int64);
    }
}
