//! Builder for resource definitions.

use crate::error::CrudError;
use crate::resource::definition::{
    DateStyle, FieldDefault, FieldDefinition, ResourceDefinition, UpdateMode,
};
use crate::storage::KEY_ATTRIBUTE;
use std::collections::HashSet;

/// Fluent builder for [`ResourceDefinition`].
///
/// # Examples
///
/// ```rust
/// use kleingarten_server::resource::{DateStyle, ResourceDefinitionBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let events = ResourceDefinitionBuilder::new("events", "kleingartenverein-events")
///     .with_text_field("title")
///     .with_date_field("date", DateStyle::German)
///     .with_fixed_field("time", "10:00")
///     .with_created_at("createdAt")
///     .build()?;
///
/// assert_eq!(events.fields().len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceDefinitionBuilder {
    name: String,
    table_name: String,
    fields: Vec<FieldDefinition>,
    update_mode: UpdateMode,
}

impl ResourceDefinitionBuilder {
    /// Start a definition for the resource `name` stored in `table_name`.
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            fields: Vec::new(),
            update_mode: UpdateMode::default(),
        }
    }

    /// Add a field with an explicit default rule.
    pub fn with_field(mut self, name: impl Into<String>, default: FieldDefault) -> Self {
        let updatable = default != FieldDefault::CreatedAt;
        self.fields.push(FieldDefinition {
            name: name.into(),
            default,
            updatable,
        });
        self
    }

    /// Add a free-text field defaulting to the empty string.
    pub fn with_text_field(self, name: impl Into<String>) -> Self {
        self.with_field(name, FieldDefault::Empty)
    }

    /// Add a date field defaulting to today's date.
    pub fn with_date_field(self, name: impl Into<String>, style: DateStyle) -> Self {
        self.with_field(name, FieldDefault::CurrentDate(style))
    }

    /// Add a field defaulting to a fixed text.
    pub fn with_fixed_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_field(name, FieldDefault::Fixed(value.into()))
    }

    /// Add the immutable creation timestamp field.
    pub fn with_created_at(self, name: impl Into<String>) -> Self {
        self.with_field(name, FieldDefault::CreatedAt)
    }

    /// Set how updates treat missing fields.
    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    /// Validate and build the definition.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Configuration`] if the resource name or table name
    /// is empty, the name contains a `/`, a field is named like the key
    /// attribute, or a field is declared twice.
    pub fn build(self) -> Result<ResourceDefinition, CrudError> {
        if self.name.trim().is_empty() {
            return Err(CrudError::configuration("Resource name cannot be empty"));
        }
        if self.name.contains('/') {
            return Err(CrudError::configuration(format!(
                "Resource name '{}' cannot contain '/'",
                self.name
            )));
        }
        if self.table_name.trim().is_empty() {
            return Err(CrudError::configuration(format!(
                "Table name for resource '{}' cannot be empty",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name == KEY_ATTRIBUTE {
                return Err(CrudError::configuration(format!(
                    "Field '{}' of resource '{}' is reserved for the record key",
                    field.name, self.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(CrudError::configuration(format!(
                    "Field '{}' declared twice on resource '{}'",
                    field.name, self.name
                )));
            }
        }

        Ok(ResourceDefinition {
            name: self.name,
            table_name: self.table_name,
            fields: self.fields,
            update_mode: self.update_mode,
        })
    }
}
