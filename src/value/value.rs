//! Single cell value

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValueType;

/// One cell of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Returns the column type this value belongs to
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int64,
            Value::Float(_) => ValueType::Float64,
            Value::Bool(_) => ValueType::Bool,
            Value::Str(_) => ValueType::Object,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::from(1).value_type(), ValueType::Int64);
        assert_eq!(Value::from(1.5).value_type(), ValueType::Float64);
        assert_eq!(Value::from(true).value_type(), ValueType::Bool);
        assert_eq!(Value::from("x").value_type(), ValueType::Object);
    }

    #[test]
    fn test_int_and_float_are_distinct() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(10).to_string(), "10");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::from("a").to_string(), "\"a\"");
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, true, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![Value::Int(1), Value::Float(2.5), Value::Bool(true), Value::from("x")]
        );
    }
}
