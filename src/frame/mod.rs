//! In-memory column-oriented tables
//!
//! The projection layer only talks to tables through [`TabularSource`]:
//! - column labels, named or positional
//! - column types
//! - row count
//! - row values by position
//! - construction of an empty table from typed columns
//!
//! [`DataFrame`] is the bundled implementation of that interface.

mod errors;
mod frame;
mod label;
mod source;

pub use errors::{FrameError, FrameResult};
pub use frame::{Column, DataFrame};
pub use label::{ColumnIndex, ColumnLabel};
pub use source::TabularSource;
