//! Observability events for zhuzi
//!
//! Every observable step of binding a table to a schema is an explicit,
//! typed event.

use std::fmt;

use super::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Table binding
    /// A table was bound to a Table wrapper
    TableBound,
    /// A bound table was replaced
    TableReplaced,
    /// Column labels failed identifier validation
    IdentifiersRejected,

    // Schema templates
    /// An empty conforming table was generated from a schema
    TemplateGenerated,
    /// A supplied table passed schema validation
    TemplateValidated,
    /// A supplied table failed schema validation
    SchemaMismatch,

    // Template definitions
    /// A template definition was registered
    TemplateDefined,
    /// A template definition has no associated record type
    MissingSchemaAssociation,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::TableBound => "TABLE_BOUND",
            Event::TableReplaced => "TABLE_REPLACED",
            Event::IdentifiersRejected => "IDENTIFIERS_REJECTED",

            Event::TemplateGenerated => "TEMPLATE_GENERATED",
            Event::TemplateValidated => "TEMPLATE_VALIDATED",
            Event::SchemaMismatch => "SCHEMA_MISMATCH",

            Event::TemplateDefined => "TEMPLATE_DEFINED",
            Event::MissingSchemaAssociation => "MISSING_SCHEMA_ASSOCIATION",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::IdentifiersRejected | Event::SchemaMismatch => Severity::Warn,
            Event::MissingSchemaAssociation => Severity::Error,
            Event::TableBound | Event::TableReplaced => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
