//! Record types bound to a schema
//!
//! A record type declares its fields once, at compile time. The
//! [`record_type!`](crate::record_type) macro generates the struct and its
//! [`RecordType`] impl from a single declaration.

use crate::record::{Record, RecordError, RecordResult};
use crate::value::ColumnValue;

use super::errors::SchemaResult;
use super::types::{Field, RecordSchema};

/// A typed record with a fixed, declared field list
pub trait RecordType: Sized {
    /// Record type name, used in diagnostics
    const NAME: &'static str;

    /// Declared fields in declaration order
    fn fields() -> Vec<Field>;

    /// Builds the schema of this record type
    fn schema() -> SchemaResult<RecordSchema> {
        RecordSchema::new(Self::NAME, Self::fields())
    }

    /// Converts a projected row into this type.
    ///
    /// Named records are read by field name, positional records by the
    /// declared field position.
    fn from_record(record: &Record) -> RecordResult<Self>;
}

/// Reads one declared field out of a record
#[doc(hidden)]
pub fn read_field<T: ColumnValue>(
    record: &Record,
    declared: &[&str],
    name: &str,
) -> RecordResult<T> {
    let value = match record.field(name) {
        Some(value) => value,
        None if record.fields().is_empty() => {
            let position = declared
                .iter()
                .position(|n| *n == name)
                .ok_or_else(|| RecordError::UnknownField(name.to_string()))?;
            record.try_get(position)?
        }
        None => return Err(RecordError::UnknownField(name.to_string())),
    };

    T::from_value(value).ok_or_else(|| RecordError::FieldType {
        field: name.to_string(),
        expected: T::VALUE_TYPE,
        found: value.value_type(),
    })
}

/// Declares a record type and its schema.
///
/// ```ignore
/// zhuzi::record_type! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct CustomPoint {
///         pub my_argument: i64,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($field_vis $field: $ty),*
        }

        impl $crate::schema::RecordType for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::schema::Field> {
                vec![$(
                    $crate::schema::Field::new(
                        stringify!($field),
                        <$ty as $crate::value::ColumnValue>::VALUE_TYPE,
                    )
                ),*]
            }

            fn from_record(
                record: &$crate::record::Record,
            ) -> $crate::record::RecordResult<Self> {
                const DECLARED: &[&str] = &[$(stringify!($field)),*];
                let _ = (record, DECLARED);
                $(
                    let $field = $crate::schema::read_field::<$ty>(
                        record,
                        DECLARED,
                        stringify!($field),
                    )?;
                )*
                Ok(Self { $($field),* })
            }
        }
    };
}
