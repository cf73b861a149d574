//! Resource definitions: which table a resource lives in, which fields it has
//! and how each field is filled in on create and rewritten on update.

use crate::resource::record::Record;
use crate::storage::{AttributeChanges, KEY_ATTRIBUTE};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Rendering of a date-valued default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD.MM.YYYY`
    German,
}

impl DateStyle {
    /// Render the date part of a timestamp in this style.
    pub fn format(&self, now: DateTime<Utc>) -> String {
        match self {
            DateStyle::Iso => now.format("%Y-%m-%d").to_string(),
            DateStyle::German => now.format("%d.%m.%Y").to_string(),
        }
    }
}

/// Value a field receives when a create request does not supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    /// Empty string.
    Empty,
    /// A fixed text, e.g. `"10:00"` for an event's time.
    Fixed(String),
    /// Today's date (UTC) in the given style.
    CurrentDate(DateStyle),
    /// Creation timestamp, RFC 3339 with milliseconds. Always server-assigned.
    CreatedAt,
}

impl FieldDefault {
    /// Produce the default value at the given instant.
    pub fn produce(&self, now: DateTime<Utc>) -> Value {
        match self {
            FieldDefault::Empty => Value::String(String::new()),
            FieldDefault::Fixed(text) => Value::String(text.clone()),
            FieldDefault::CurrentDate(style) => Value::String(style.format(now)),
            FieldDefault::CreatedAt => {
                Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

/// How an update request treats updatable fields missing from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Only fields present in the payload are written.
    #[default]
    Merge,
    /// Every updatable field is written; fields missing from the payload are
    /// removed from the stored record.
    Overwrite,
}

/// A single declared field of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub default: FieldDefault,
    pub updatable: bool,
}

impl FieldDefinition {
    /// Value stored on create: the caller's value if usable, the default otherwise.
    ///
    /// Server-assigned fields ignore the caller entirely.
    fn create_value(&self, payload: &Map<String, Value>, now: DateTime<Utc>) -> Value {
        if self.default == FieldDefault::CreatedAt {
            return self.default.produce(now);
        }

        payload
            .get(&self.name)
            .and_then(normalize_value)
            .filter(|value| value.as_str() != Some(""))
            .unwrap_or_else(|| self.default.produce(now))
    }
}

/// Convert a caller-supplied attribute value into its stored form.
///
/// Strings are kept and numbers or booleans are stored as text. `null`,
/// arrays and objects count as absent.
pub fn normalize_value(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Complete description of one CRUD resource.
///
/// Build one with [`ResourceDefinitionBuilder`](crate::resource::ResourceDefinitionBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub(crate) name: String,
    pub(crate) table_name: String,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) update_mode: UpdateMode,
}

impl ResourceDefinition {
    /// Resource name as it appears in the URL path (e.g. `news`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Update behaviour for missing fields.
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Return a copy of this definition with a different update mode.
    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    /// Return a copy of this definition backed by another table.
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Build the full record stored by a create request.
    ///
    /// Every declared field is present in the result. Attributes in the
    /// payload that are not declared are dropped.
    pub fn build_record(&self, id: &str, payload: &Map<String, Value>, now: DateTime<Utc>) -> Record {
        let mut attributes = Map::new();
        attributes.insert(KEY_ATTRIBUTE.to_string(), Value::String(id.to_string()));
        for field in &self.fields {
            attributes.insert(field.name.clone(), field.create_value(payload, now));
        }
        Record::from_map(attributes)
    }

    /// Translate an update payload into attribute changes for the store.
    ///
    /// Only updatable fields are ever touched.
    pub fn update_changes(&self, payload: &Map<String, Value>) -> AttributeChanges {
        let mut changes = AttributeChanges::new();
        for field in self.fields.iter().filter(|field| field.updatable) {
            match payload.get(&field.name).and_then(normalize_value) {
                Some(value) => {
                    changes.set.insert(field.name.clone(), value);
                }
                None if self.update_mode == UpdateMode::Overwrite => {
                    changes.remove.push(field.name.clone())
                }
                None => {}
            }
        }
        changes
    }
}
