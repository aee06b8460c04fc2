//! Column label validation
//!
//! A named column must be a legal identifier: a letter or underscore
//! followed by letters, digits or underscores (Unicode XID rules).
//! Positional labels are never legal once a table names its columns.

use regex::Regex;
use std::sync::OnceLock;

use crate::frame::{ColumnIndex, ColumnLabel, TabularSource};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{TableError, TableResult};

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("identifier pattern is valid")
    })
}

/// Returns true if `name` is a legal identifier
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Returns the labels of `index` that are not legal identifiers.
///
/// A positional index has no names and is always accepted.
pub fn invalid_labels(index: &ColumnIndex) -> Vec<ColumnLabel> {
    match index {
        ColumnIndex::Positional(_) => Vec::new(),
        ColumnIndex::Named(labels) => labels
            .iter()
            .filter(|label| match label {
                ColumnLabel::Name(name) => !is_valid_identifier(name),
                ColumnLabel::Position(_) => true,
            })
            .cloned()
            .collect(),
    }
}

/// Validates every column label of a source
pub fn validate_column_labels<S: TabularSource>(source: &S) -> TableResult<()> {
    let invalid = invalid_labels(&source.column_index());
    if invalid.is_empty() {
        return Ok(());
    }

    let err = TableError::invalid_identifier(invalid);
    if let TableError::InvalidIdentifier { labels } = &err {
        let joined = labels.join(", ");
        log_event_with_fields(Event::IdentifiersRejected, &[("labels", joined.as_str())]);
    }
    Err(err)
}
