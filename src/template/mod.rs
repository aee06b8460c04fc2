//! Schema templates
//!
//! Binds tables to declared record types.
//!
//! # Design Principles
//!
//! - Every template is associated with exactly one record type
//! - A template without a supplied table generates an empty conforming one
//! - A supplied table must provide every field with its exact type
//! - Extra columns are tolerated and preserved
//! - Replacing the table re-runs every check
//! - No column is ever cast or dropped

mod bound;
mod errors;
mod registry;
mod template;
mod validator;

pub use bound::SchemaBoundTable;
pub use errors::{MismatchDetails, Severity, TemplateError, TemplateErrorCode, TemplateResult};
pub use registry::{TemplateDefinition, TemplateRegistry};
pub use template::SchemaTemplate;
pub use validator::CompatibilityValidator;
