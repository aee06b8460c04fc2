//! Column-major in-memory table

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::value::{Value, ValueType};

use super::errors::{FrameError, FrameResult};
use super::label::{ColumnIndex, ColumnLabel};
use super::source::TabularSource;

/// A homogeneously typed column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    label: ColumnLabel,
    dtype: ValueType,
    #[serde(default)]
    values: Vec<Value>,
}

impl Column {
    /// Creates a column, checking every value against `dtype`
    pub fn new(
        label: impl Into<ColumnLabel>,
        dtype: ValueType,
        values: Vec<Value>,
    ) -> FrameResult<Self> {
        let column = Self {
            label: label.into(),
            dtype,
            values,
        };
        column.check_values()?;
        Ok(column)
    }

    /// Creates a column with no rows
    pub fn empty(label: impl Into<ColumnLabel>, dtype: ValueType) -> Self {
        Self {
            label: label.into(),
            dtype,
            values: Vec::new(),
        }
    }

    pub fn label(&self) -> &ColumnLabel {
        &self.label
    }

    pub fn dtype(&self) -> ValueType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_values(&self) -> FrameResult<()> {
        if let Some(bad) = self.values.iter().find(|v| v.value_type() != self.dtype) {
            return Err(FrameError::MixedColumnTypes {
                column: self.label.to_string(),
                expected: self.dtype,
                found: bad.value_type(),
            });
        }
        Ok(())
    }
}

/// Wire form of a [`DataFrame`], validated on conversion.
#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    named: bool,
    #[serde(default)]
    columns: Vec<Column>,
}

/// An in-memory table with named or positional columns.
///
/// Every column is homogeneously typed and all columns share one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct DataFrame {
    named: bool,
    columns: Vec<Column>,
}

impl TryFrom<RawFrame> for DataFrame {
    type Error = FrameError;

    fn try_from(raw: RawFrame) -> FrameResult<Self> {
        for column in &raw.columns {
            column.check_values()?;
        }
        Self::checked(raw.named, raw.columns)
    }
}

impl DataFrame {
    /// Creates a table with no columns and no rows
    pub fn empty() -> Self {
        Self {
            named: false,
            columns: Vec::new(),
        }
    }

    /// Creates a table with positional column labels from row-major data.
    ///
    /// Column types are taken from the first row.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> FrameResult<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        let labels = (0..width as i64).map(ColumnLabel::Position).collect();
        let columns = Self::transpose(labels, rows)?;
        Self::checked(false, columns)
    }

    /// Creates a table with explicit column labels from row-major data.
    ///
    /// With no rows every column is typed `object`.
    pub fn with_labels(labels: Vec<ColumnLabel>, rows: Vec<Vec<Value>>) -> FrameResult<Self> {
        if let Some(first) = rows.first() {
            if first.len() != labels.len() {
                return Err(FrameError::LabelCountMismatch {
                    labels: labels.len(),
                    width: first.len(),
                });
            }
        }
        let columns = Self::transpose(labels, rows)?;
        Self::checked(true, columns)
    }

    /// Creates a table with named columns from typed columns
    pub fn from_columns(columns: Vec<Column>) -> FrameResult<Self> {
        Self::checked(true, columns)
    }

    /// Parses a table from its JSON form
    pub fn from_json_str(json: &str) -> FrameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn transpose(labels: Vec<ColumnLabel>, rows: Vec<Vec<Value>>) -> FrameResult<Vec<Column>> {
        let width = labels.len();
        let dtypes: Vec<ValueType> = match rows.first() {
            Some(first) => first.iter().map(Value::value_type).collect(),
            None => vec![ValueType::Object; width],
        };

        let mut columns: Vec<Column> = labels
            .into_iter()
            .zip(dtypes)
            .map(|(label, dtype)| Column {
                label,
                dtype,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(FrameError::RaggedRows {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        for column in &columns {
            column.check_values()?;
        }
        Ok(columns)
    }

    fn checked(named: bool, columns: Vec<Column>) -> FrameResult<Self> {
        if !named {
            let misplaced = columns
                .iter()
                .enumerate()
                .find(|(idx, c)| c.label != ColumnLabel::Position(*idx as i64));
            if let Some((position, column)) = misplaced {
                return Err(FrameError::PositionalLabel {
                    position,
                    label: column.label.quoted(),
                });
            }
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(&column.label) {
                return Err(FrameError::DuplicateColumn(column.label.to_string()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(FrameError::ColumnLengthMismatch {
                    column: bad.label.to_string(),
                    expected,
                    found: bad.len(),
                });
            }
        }

        Ok(Self { named, columns })
    }

    /// Returns the column with the given label
    pub fn column(&self, label: &ColumnLabel) -> Option<&Column> {
        self.columns.iter().find(|c| &c.label == label)
    }

    /// Returns the column with the given name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label.as_name() == Some(name))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn labels(&self) -> Vec<ColumnLabel> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_named(&self) -> bool {
        self.named
    }
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::empty()
    }
}

impl TabularSource for DataFrame {
    fn column_index(&self) -> ColumnIndex {
        if self.named {
            ColumnIndex::Named(self.labels())
        } else {
            ColumnIndex::Positional(self.columns.len())
        }
    }

    fn dtypes(&self) -> Vec<(ColumnLabel, ValueType)> {
        self.columns
            .iter()
            .map(|c| (c.label.clone(), c.dtype))
            .collect()
    }

    fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    fn row_values(&self, position: usize) -> Option<Vec<Value>> {
        if position >= self.n_rows() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[position].clone())
                .collect(),
        )
    }

    fn empty_with_columns(columns: &[(String, ValueType)]) -> Self {
        Self {
            named: true,
            columns: columns
                .iter()
                .map(|(name, dtype)| Column::empty(name.as_str(), *dtype))
                .collect(),
        }
    }
}
