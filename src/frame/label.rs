//! Column labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a single column.
///
/// Tables built without explicit labels use positional labels `0..n`.
/// Explicit label lists may mix both kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnLabel {
    Position(i64),
    Name(String),
}

impl ColumnLabel {
    /// Returns the label name, `None` for positional labels
    pub fn as_name(&self) -> Option<&str> {
        match self {
            ColumnLabel::Name(name) => Some(name),
            ColumnLabel::Position(_) => None,
        }
    }

    /// Returns the label wrapped in double quotes, as used in diagnostics
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self)
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnLabel::Position(p) => write!(f, "{}", p),
            ColumnLabel::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for ColumnLabel {
    fn from(name: &str) -> Self {
        ColumnLabel::Name(name.to_string())
    }
}

impl From<String> for ColumnLabel {
    fn from(name: String) -> Self {
        ColumnLabel::Name(name)
    }
}

impl From<i64> for ColumnLabel {
    fn from(position: i64) -> Self {
        ColumnLabel::Position(position)
    }
}

impl From<i32> for ColumnLabel {
    fn from(position: i32) -> Self {
        ColumnLabel::Position(position as i64)
    }
}

/// The column index of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnIndex {
    /// Explicitly labelled columns
    Named(Vec<ColumnLabel>),
    /// Default positional index over this many columns
    Positional(usize),
}

impl ColumnIndex {
    pub fn is_named(&self) -> bool {
        matches!(self, ColumnIndex::Named(_))
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnIndex::Named(labels) => labels.len(),
            ColumnIndex::Positional(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the labels in column order
    pub fn labels(&self) -> Vec<ColumnLabel> {
        match self {
            ColumnIndex::Named(labels) => labels.clone(),
            ColumnIndex::Positional(n) => (0..*n as i64).map(ColumnLabel::Position).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_labels() {
        assert_eq!(ColumnLabel::from("a b").quoted(), "\"a b\"");
        assert_eq!(ColumnLabel::from(0).quoted(), "\"0\"");
    }

    #[test]
    fn test_positional_index_labels() {
        let index = ColumnIndex::Positional(2);
        assert!(!index.is_named());
        assert_eq!(index.labels(), vec![ColumnLabel::Position(0), ColumnLabel::Position(1)]);
    }

    #[test]
    fn test_mixed_labels_from_json() {
        let labels: Vec<ColumnLabel> = serde_json::from_str(r#"["a b", 0]"#).unwrap();
        assert_eq!(labels, vec![ColumnLabel::from("a b"), ColumnLabel::Position(0)]);
    }
}
