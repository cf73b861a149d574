//! In-memory storage implementation for resource records.
//!
//! Thread-safe implementation of the `StorageProvider` trait using nested
//! HashMaps behind a tokio `RwLock`. Used by tests, local development, and as
//! the reference behaviour for remote backends.
//!
//! # Performance Characteristics
//!
//! * PUT/GET/UPDATE/DELETE: O(1) average case
//! * SCAN: O(n) in the table size, bounded by the limit for the copy
//! * COUNT: O(1)

use crate::storage::{
    AttributeChanges, KEY_ATTRIBUTE, ScanPage, StorageError, StorageKey, StorageProvider,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage implementation.
///
/// Structure: `table` → `id` → `record`
#[derive(Clone)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

/// Statistics about in-memory storage usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    pub table_count: usize,
    pub total_records: usize,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let data_guard = self.data.read().await;
        InMemoryStorageStats {
            table_count: data_guard.len(),
            total_records: data_guard.values().map(HashMap::len).sum(),
        }
    }

    /// Get all table names currently holding data.
    pub async fn list_tables(&self) -> Vec<String> {
        let data_guard = self.data.read().await;
        data_guard
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(table, _)| table.clone())
            .collect()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for InMemoryStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        if !data.is_object() {
            return Err(StorageError::invalid_data(format!(
                "record for {} is not a JSON object",
                key
            )));
        }

        let mut data_guard = self.data.write().await;
        data_guard
            .entry(key.table().to_string())
            .or_default()
            .insert(key.id().to_string(), data.clone());

        Ok(data)
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        let data_guard = self.data.read().await;
        Ok(data_guard
            .get(key.table())
            .and_then(|records| records.get(key.id()))
            .cloned())
    }

    async fn update(&self, key: StorageKey, changes: AttributeChanges) -> Result<Value, Self::Error> {
        let mut data_guard = self.data.write().await;

        let record = data_guard
            .entry(key.table().to_string())
            .or_default()
            .entry(key.id().to_string())
            .or_insert_with(|| {
                let mut fresh = Map::new();
                fresh.insert(KEY_ATTRIBUTE.to_string(), Value::String(key.id().to_string()));
                Value::Object(fresh)
            });

        let object = record.as_object_mut().ok_or_else(|| {
            StorageError::invalid_data(format!("stored record {} is not a JSON object", key))
        })?;

        for (name, value) in changes.set {
            if name != KEY_ATTRIBUTE {
                object.insert(name, value);
            }
        }
        for name in &changes.remove {
            if name != KEY_ATTRIBUTE {
                object.remove(name);
            }
        }

        Ok(record.clone())
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let mut data_guard = self.data.write().await;
        Ok(data_guard
            .get_mut(key.table())
            .map(|records| records.remove(key.id()).is_some())
            .unwrap_or(false))
    }

    async fn scan(&self, table: &str, limit: usize) -> Result<ScanPage, Self::Error> {
        let data_guard = self.data.read().await;
        let Some(records) = data_guard.get(table) else {
            return Ok(ScanPage::default());
        };

        Ok(ScanPage {
            items: records.values().take(limit).cloned().collect(),
            truncated: records.len() > limit,
        })
    }

    async fn count(&self, table: &str) -> Result<usize, Self::Error> {
        let data_guard = self.data.read().await;
        Ok(data_guard.get(table).map(HashMap::len).unwrap_or(0))
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
        Ok(())
    }
}
