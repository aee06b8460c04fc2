//! Record schemas
//!
//! A record schema is the declared contract of a record type: an ordered
//! list of uniquely named, typed fields.
//!
//! # Design Principles
//!
//! - Field names are legal identifiers
//! - Field names are unique
//! - Declaration order is kept; comparisons use the name-sorted view
//! - No defaults, no nullable fields, no coercion

mod errors;
mod record_type;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use record_type::{read_field, RecordType};
pub use types::{Field, RecordSchema};
