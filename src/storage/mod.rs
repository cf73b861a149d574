//! Storage abstraction layer for resource records.
//!
//! The `StorageProvider` trait models a schemaless key-value table store: one
//! table per resource, records keyed by their `id` attribute. It knows nothing
//! about field defaults, identifier generation or HTTP; that logic lives in
//! the provider layer.
//!
//! # Example Usage
//!
//! ```rust
//! use kleingarten_server::storage::{InMemoryStorage, StorageKey, StorageProvider};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("kleingartenverein-news", "42");
//! storage.put(key.clone(), json!({"id": "42", "title": "Maifest"})).await?;
//!
//! let page = storage.scan("kleingartenverein-news", 100).await?;
//! assert_eq!(page.items.len(), 1);
//!
//! assert!(storage.delete(key).await?);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(test)]
pub(crate) mod tests;

pub use errors::StorageError;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStorage;

use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;

/// Name of the attribute every table is keyed by.
pub const KEY_ATTRIBUTE: &str = "id";

/// Location of a single record: table name plus record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    table: String,
    id: String,
}

impl StorageKey {
    /// Create a new storage key.
    pub fn new(table: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            id: id.into(),
        }
    }

    /// Get the table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get the record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.table, self.id)
    }
}

/// Attribute-level changes applied by [`StorageProvider::update`].
///
/// Mirrors a key-value update expression: `set` assigns attributes, `remove`
/// deletes them. The key attribute is never part of either list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeChanges {
    pub set: Map<String, Value>,
    pub remove: Vec<String>,
}

impl AttributeChanges {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an attribute.
    pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set.insert(name.into(), value);
        self
    }

    /// Remove an attribute.
    pub fn remove(mut self, name: impl Into<String>) -> Self {
        self.remove.push(name.into());
        self
    }

    /// Whether the change set does nothing.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }
}

/// Result of a bounded table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    /// Records in backend scan order, at most the requested limit.
    pub items: Vec<Value>,
    /// Whether the table held more records than the limit allowed.
    pub truncated: bool,
}

/// Core trait for storage providers that handle pure data persistence operations.
///
/// # Key Design Decisions
///
/// - **PUT replaces**: a put on an existing key overwrites the whole record.
/// - **UPDATE upserts**: like a key-value update-item call, updating a key
///   that does not exist creates a record holding the key and the assigned
///   attributes. Callers that need an existence check must do it themselves.
/// - **DELETE returns boolean**: whether a record existed; deleting a missing
///   key is not an error.
/// - **SCAN is bounded**: callers always pass a limit, and learn whether the
///   table held more.
pub trait StorageProvider: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store a record at the specified key and return the stored data.
    fn put(
        &self,
        key: StorageKey,
        data: Value,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Retrieve a record by key.
    fn get(
        &self,
        key: StorageKey,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Apply attribute changes to a record and return the record after the update.
    fn update(
        &self,
        key: StorageKey,
        changes: AttributeChanges,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Delete a record by key.
    ///
    /// Returns `true` if the record was deleted, `false` if it didn't exist.
    fn delete(&self, key: StorageKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Scan a table, returning at most `limit` records in backend order.
    ///
    /// Ordering is not guaranteed to be stable across calls.
    fn scan(
        &self,
        table: &str,
        limit: usize,
    ) -> impl Future<Output = Result<ScanPage, Self::Error>> + Send;

    /// Count the records in a table.
    fn count(&self, table: &str) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Remove every record from every table. Intended for tests.
    fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
