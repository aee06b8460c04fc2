//! Tables bound to a compile-time record type
//!
//! The record type is a type parameter, so every concrete template carries
//! exactly one association and forgetting it does not compile:
//!
//! ```ignore
//! zhuzi::record_type! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct CustomPoint {
//!         pub my_argument: i64,
//!     }
//! }
//!
//! type CustomDataSet = SchemaTemplate<CustomPoint>;
//!
//! let dataset = CustomDataSet::new()?;
//! assert!(dataset.is_empty());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::frame::{DataFrame, TabularSource};
use crate::record::Record;
use crate::schema::{RecordSchema, RecordType};
use crate::table::Table;

use super::bound::SchemaBoundTable;
use super::errors::TemplateResult;

/// A table bound to the schema of record type `R`, yielding `R` per row
pub struct SchemaTemplate<R: RecordType, S: TabularSource = DataFrame> {
    inner: SchemaBoundTable<S>,
    _point: PhantomData<fn() -> R>,
}

impl<R: RecordType, S: TabularSource> SchemaTemplate<R, S> {
    /// Creates an empty table whose columns are exactly the fields of `R`
    pub fn new() -> TemplateResult<Self> {
        Self::from_source(None)
    }

    /// Binds a table after checking it satisfies the fields of `R`
    pub fn with_table(source: S) -> TemplateResult<Self> {
        Self::from_source(Some(source))
    }

    /// Binds `source` if given, otherwise generates an empty table
    pub fn from_source(source: Option<S>) -> TemplateResult<Self> {
        let schema = R::schema()?;
        Ok(Self {
            inner: SchemaBoundTable::new(schema, source)?,
            _point: PhantomData,
        })
    }

    /// Replaces the bound table, re-running every check
    pub fn rebind(&mut self, source: S) -> TemplateResult<S> {
        self.inner.rebind(source)
    }

    /// Reads the row at `position` as an `R`
    pub fn row_at(&self, position: usize) -> TemplateResult<R> {
        let record = self.inner.row_at(position)?;
        Ok(R::from_record(&record)?)
    }

    /// Reads the row at `position` as an untyped record, extra columns included
    pub fn record_at(&self, position: usize) -> TemplateResult<Record> {
        self.inner.row_at(position)
    }

    /// Iterates over all rows as `R`, in order
    pub fn points(&self) -> impl Iterator<Item = TemplateResult<R>> + '_ {
        (0..self.len()).map(move |position| self.row_at(position))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn schema(&self) -> &RecordSchema {
        self.inner.schema()
    }

    pub fn table(&self) -> &Table<S> {
        self.inner.table()
    }

    pub fn into_inner(self) -> SchemaBoundTable<S> {
        self.inner
    }
}

impl<R: RecordType, S: TabularSource + fmt::Debug> fmt::Debug for SchemaTemplate<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaTemplate")
            .field("point", &R::NAME)
            .field("inner", &self.inner)
            .finish()
    }
}
