//! Stored records and record identifiers.

use crate::storage::KEY_ATTRIBUTE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A schemaless record as held in a resource table.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an attribute map.
    pub fn from_map(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Convert a stored JSON value into a record; `None` if it is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The record's identifier, if it is stored as text.
    pub fn id(&self) -> Option<&str> {
        self.get_str(KEY_ATTRIBUTE)
    }

    /// Get a raw attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Get a text attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Borrow the attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Clone the record into a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Consume the record into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Identifier of a record as seen by clients.
///
/// The server always assigns text identifiers; locally created or placeholder
/// items on the client side may carry numeric ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}
