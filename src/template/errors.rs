//! Template error types
//!
//! Error codes:
//! - ZHUZI_SCHEMA_MISMATCH (REJECT)
//! - ZHUZI_INVALID_IDENTIFIER (REJECT)
//! - ZHUZI_ROW_OUT_OF_BOUNDS (REJECT)
//! - ZHUZI_RECORD_CONVERSION (REJECT)
//! - ZHUZI_UNKNOWN_TEMPLATE (REJECT)
//! - ZHUZI_TEMPLATE_IMMUTABLE (REJECT)
//! - ZHUZI_INVALID_RECORD_TYPE (FATAL)
//! - ZHUZI_MISSING_SCHEMA_ASSOCIATION (FATAL)

use std::fmt;

use crate::record::RecordError;
use crate::schema::SchemaError;
use crate::table::TableError;

/// Severity levels for template errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The caller supplied bad input and may retry with corrected input
    Reject,
    /// Programming error in a declaration; not recoverable at runtime
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Template error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateErrorCode {
    /// Table columns or column types do not satisfy the record schema
    SchemaMismatch,
    /// A column label is not a legal identifier
    InvalidIdentifier,
    /// Row position past the end of the table
    RowOutOfBounds,
    /// A projected row could not be converted into the record type
    RecordConversion,
    /// No template with that name is defined
    UnknownTemplate,
    /// A template with that name is already defined
    TemplateImmutable,
    /// A record type declares an invalid field list
    InvalidRecordType,
    /// A template was declared without an associated record type
    MissingSchemaAssociation,
}

impl TemplateErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            TemplateErrorCode::SchemaMismatch => "ZHUZI_SCHEMA_MISMATCH",
            TemplateErrorCode::InvalidIdentifier => "ZHUZI_INVALID_IDENTIFIER",
            TemplateErrorCode::RowOutOfBounds => "ZHUZI_ROW_OUT_OF_BOUNDS",
            TemplateErrorCode::RecordConversion => "ZHUZI_RECORD_CONVERSION",
            TemplateErrorCode::UnknownTemplate => "ZHUZI_UNKNOWN_TEMPLATE",
            TemplateErrorCode::TemplateImmutable => "ZHUZI_TEMPLATE_IMMUTABLE",
            TemplateErrorCode::InvalidRecordType => "ZHUZI_INVALID_RECORD_TYPE",
            TemplateErrorCode::MissingSchemaAssociation => "ZHUZI_MISSING_SCHEMA_ASSOCIATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            TemplateErrorCode::MissingSchemaAssociation | TemplateErrorCode::InvalidRecordType => {
                Severity::Fatal
            }
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for TemplateErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which schema fields a table failed to satisfy
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MismatchDetails {
    /// Schema fields with no matching column, sorted
    pub missing: Vec<String>,
    /// Schema fields whose column has a different type, sorted
    pub mistyped: Vec<String>,
}

/// Template error type with full context
#[derive(Debug, Clone)]
pub struct TemplateError {
    /// Error code
    code: TemplateErrorCode,
    /// Human-readable message
    message: String,
    /// Template or record type name if applicable
    template: Option<String>,
    /// Mismatch details if applicable
    details: Option<MismatchDetails>,
}

impl TemplateError {
    fn new(code: TemplateErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            template: None,
            details: None,
        }
    }

    fn for_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(
        record: impl Into<String>,
        message: impl Into<String>,
        details: MismatchDetails,
    ) -> Self {
        let mut err = Self::new(TemplateErrorCode::SchemaMismatch, message).for_template(record);
        err.details = Some(details);
        err
    }

    /// Create a missing schema association error
    pub fn missing_schema_association(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(
            TemplateErrorCode::MissingSchemaAssociation,
            format!("Can't declare {} without an associated record type", template),
        )
        .for_template(template)
    }

    /// Create an unknown template error
    pub fn unknown_template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(
            TemplateErrorCode::UnknownTemplate,
            format!("Template '{}' not found", template),
        )
        .for_template(template)
    }

    /// Create a template immutable error
    pub fn template_immutable(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(
            TemplateErrorCode::TemplateImmutable,
            format!("Template '{}' is already defined", template),
        )
        .for_template(template)
    }

    /// Returns the error code
    pub fn code(&self) -> TemplateErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the template or record type name if applicable
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Returns mismatch details if applicable
    pub fn details(&self) -> Option<&MismatchDetails> {
        self.details.as_ref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for TemplateError {}

impl From<TableError> for TemplateError {
    fn from(e: TableError) -> Self {
        let code = match e {
            TableError::InvalidIdentifier { .. } => TemplateErrorCode::InvalidIdentifier,
            TableError::RowOutOfBounds { .. } => TemplateErrorCode::RowOutOfBounds,
        };
        Self::new(code, e.to_string())
    }
}

impl From<RecordError> for TemplateError {
    fn from(e: RecordError) -> Self {
        Self::new(TemplateErrorCode::RecordConversion, e.to_string())
    }
}

impl From<SchemaError> for TemplateError {
    fn from(e: SchemaError) -> Self {
        let record = match &e {
            SchemaError::DuplicateField { record, .. } => record.clone(),
            SchemaError::InvalidFieldName { record, .. } => record.clone(),
        };
        Self::new(TemplateErrorCode::InvalidRecordType, e.to_string()).for_template(record)
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TemplateErrorCode::SchemaMismatch.code(), "ZHUZI_SCHEMA_MISMATCH");
        assert_eq!(
            TemplateErrorCode::MissingSchemaAssociation.code(),
            "ZHUZI_MISSING_SCHEMA_ASSOCIATION"
        );
        assert_eq!(TemplateErrorCode::InvalidIdentifier.code(), "ZHUZI_INVALID_IDENTIFIER");
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(TemplateErrorCode::SchemaMismatch.severity(), Severity::Reject);
        assert_eq!(
            TemplateErrorCode::MissingSchemaAssociation.severity(),
            Severity::Fatal
        );
    }

    #[test]
    fn test_missing_association_names_template() {
        let err = TemplateError::missing_schema_association("CustomDataSet");
        assert!(err.is_fatal());
        assert_eq!(err.template(), Some("CustomDataSet"));
        assert!(err.message().contains("CustomDataSet"));
    }

    #[test]
    fn test_display_includes_code() {
        let err = TemplateError::unknown_template("Nope");
        let display = format!("{}", err);
        assert!(display.starts_with("[REJECT] ZHUZI_UNKNOWN_TEMPLATE"));
    }

    #[test]
    fn test_table_error_conversion() {
        let err: TemplateError = TableError::invalid_identifier(["a b"]).into();
        assert_eq!(err.code(), TemplateErrorCode::InvalidIdentifier);
        assert_eq!(
            err.message(),
            "\"a b\" not allowed as column name(s): invalid identifier(s)"
        );
    }
}
