//! Runtime template definitions
//!
//! Templates whose record type is only known at runtime are declared as
//! [`TemplateDefinition`]s. The association is resolved once, when the
//! definition is registered:
//! - a definition's own `point` schema wins
//! - otherwise the schema resolved for its `base` template is inherited
//! - a definition with neither is rejected (FATAL)
//!
//! Registered definitions live in memory only and never change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::frame::TabularSource;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::RecordSchema;

use super::bound::SchemaBoundTable;
use super::errors::{TemplateError, TemplateResult};

/// Declaration of a named template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Template name, unique within a registry
    pub name: String,
    /// Record type declared directly on this template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<RecordSchema>,
    /// Template this one extends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl TemplateDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            point: None,
            base: None,
        }
    }

    /// Declares the record type of this template
    pub fn with_point(mut self, point: RecordSchema) -> Self {
        self.point = Some(point);
        self
    }

    /// Extends another template
    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

/// A registered definition with its resolved record schema
#[derive(Debug, Clone)]
struct ResolvedTemplate {
    definition: TemplateDefinition,
    schema: RecordSchema,
}

/// Registry of runtime template definitions.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    /// Registered templates indexed by name
    templates: HashMap<String, ResolvedTemplate>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, resolving its record type.
    ///
    /// # Errors
    ///
    /// - `TemplateImmutable` if the name is already registered
    /// - `UnknownTemplate` if the base template is not registered
    /// - `MissingSchemaAssociation` if neither the definition nor its base
    ///   provides a record type
    pub fn define(&mut self, definition: TemplateDefinition) -> TemplateResult<&RecordSchema> {
        if self.templates.contains_key(&definition.name) {
            return Err(TemplateError::template_immutable(&definition.name));
        }

        let schema = match (&definition.point, &definition.base) {
            (Some(point), _) => point.clone(),
            (None, Some(base)) => self
                .templates
                .get(base)
                .map(|resolved| resolved.schema.clone())
                .ok_or_else(|| TemplateError::unknown_template(base))?,
            (None, None) => {
                log_event_with_fields(
                    Event::MissingSchemaAssociation,
                    &[("template", definition.name.as_str())],
                );
                return Err(TemplateError::missing_schema_association(&definition.name));
            }
        };

        log_event_with_fields(
            Event::TemplateDefined,
            &[("record", schema.name()), ("template", definition.name.as_str())],
        );

        let name = definition.name.clone();
        let resolved = self
            .templates
            .entry(name)
            .or_insert(ResolvedTemplate { definition, schema });
        Ok(&resolved.schema)
    }

    /// Gets the resolved record schema of a template.
    pub fn get(&self, name: &str) -> Option<&RecordSchema> {
        self.templates.get(name).map(|resolved| &resolved.schema)
    }

    /// Gets the definition a template was registered with.
    pub fn definition(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.get(name).map(|resolved| &resolved.definition)
    }

    /// Checks if a template exists.
    pub fn exists(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns the number of registered templates.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Builds a schema-bound table from a registered template.
    ///
    /// With no source an empty conforming table is generated.
    pub fn instantiate<S: TabularSource>(
        &self,
        name: &str,
        source: Option<S>,
    ) -> TemplateResult<SchemaBoundTable<S>> {
        let schema = self
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::unknown_template(name))?;
        SchemaBoundTable::new(schema, source)
    }
}
