//! Cell values and column type tags
//!
//! Supported types:
//! - int64: 64-bit signed integer
//! - float64: 64-bit floating point
//! - bool: Boolean
//! - object: UTF-8 string
//!
//! Values never coerce between types. An integer cell does not satisfy a
//! float64 column and vice versa.

mod types;
mod value;

pub use types::{ColumnValue, ValueType};
pub use value::Value;
