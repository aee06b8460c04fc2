//! zhuzi - Typed record projections over schema-bound tables
//!
//! Maps the rows of a column-oriented table to typed records and enforces
//! that a table's column names and types satisfy a declared record schema.
//!
//! - [`table::Table`] validates column labels and projects rows into
//!   [`record::Record`]s
//! - [`template::SchemaTemplate`] binds a table to a record type, generating
//!   an empty conforming table or validating a supplied one
//! - [`template::TemplateRegistry`] does the same for record types known only
//!   at runtime

pub mod config;
pub mod frame;
pub mod observability;
pub mod record;
pub mod schema;
pub mod table;
pub mod template;
pub mod value;

pub use frame::{Column, ColumnLabel, DataFrame, TabularSource};
pub use record::Record;
pub use schema::{Field, RecordSchema, RecordType};
pub use table::Table;
pub use template::{SchemaBoundTable, SchemaTemplate, TemplateError, TemplateErrorCode};
pub use value::{Value, ValueType};
