//! Row records
//!
//! A [`Record`] is an immutable value holding one row, addressable by
//! position and, when built from named columns, by field name.

mod errors;
mod record;

pub use errors::{RecordError, RecordResult};
pub use record::Record;
