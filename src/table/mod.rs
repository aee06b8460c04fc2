//! Tables of records
//!
//! [`Table`] wraps a tabular source, enforces that named columns are legal
//! identifiers and projects rows into [`Record`](crate::record::Record)s.
//!
//! - Positional columns yield positional records
//! - Named columns yield records with named fields
//! - Column labels are re-validated whenever the source is replaced

mod errors;
mod identifier;
mod table;

pub use errors::{TableError, TableResult};
pub use identifier::{invalid_labels, is_valid_identifier, validate_column_labels};
pub use table::{Rows, Table};
