//! Standard resource provider implementation with pluggable storage.
//!
//! This module provides the implementation of the [`ResourceProvider`] trait
//! that separates resource rules (identifier generation, field defaults,
//! update modes) from storage concerns through the [`StorageProvider`]
//! interface.
//!
//! # Example Usage
//!
//! ```rust
//! use kleingarten_server::providers::StandardResourceProvider;
//! use kleingarten_server::resource::{RequestContext, ResourceProvider};
//! use kleingarten_server::resource_handlers::news_resource;
//! use kleingarten_server::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = StandardResourceProvider::new(InMemoryStorage::new());
//! let news = news_resource("kleingartenverein-news")?;
//! let context = RequestContext::with_generated_id();
//!
//! let payload = json!({"title": "Maifest"});
//! let record = provider
//!     .create_record(&news, payload.as_object().unwrap(), &context)
//!     .await?;
//! assert_eq!(record.get_str("title"), Some("Maifest"));
//! assert_eq!(record.get_str("content"), Some(""));
//! # Ok(())
//! # }
//! ```

use crate::providers::ProviderError;
use crate::resource::{
    ListOutcome, Record, RequestContext, ResourceDefinition, ResourceProvider,
};
use crate::storage::{StorageKey, StorageProvider};
use chrono::Utc;
use log::{debug, info, trace, warn};
use serde_json::{Map, Value};

/// Standard resource provider with pluggable storage backend.
///
/// Identifiers are random UUIDs; timestamps come from the system clock in UTC.
#[derive(Debug, Clone)]
pub struct StandardResourceProvider<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> StandardResourceProvider<S> {
    /// Create a new standard provider with the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn generate_record_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn to_record(value: Value) -> Result<Record, ProviderError> {
        Record::from_value(value).ok_or_else(|| ProviderError::InvalidData {
            message: "stored record is not a JSON object".to_string(),
        })
    }
}

impl<S: StorageProvider> ResourceProvider for StandardResourceProvider<S> {
    type Error = ProviderError;

    async fn list_records(
        &self,
        definition: &ResourceDefinition,
        limit: usize,
        context: &RequestContext,
    ) -> Result<ListOutcome, Self::Error> {
        debug!(
            "Listing {} records from table '{}' (limit: {}, request: '{}')",
            definition.name(),
            definition.table_name(),
            limit,
            context.request_id
        );

        let page = self
            .storage
            .scan(definition.table_name(), limit)
            .await
            .map_err(ProviderError::storage)?;

        let mut records = Vec::with_capacity(page.items.len());
        for item in page.items {
            match Record::from_value(item) {
                Some(record) => records.push(record),
                None => warn!(
                    "Skipping non-object item in table '{}'",
                    definition.table_name()
                ),
            }
        }

        if page.truncated {
            warn!(
                "List of {} truncated at {} records (request: '{}')",
                definition.name(),
                limit,
                context.request_id
            );
        }

        Ok(ListOutcome {
            records,
            truncated: page.truncated,
        })
    }

    async fn create_record(
        &self,
        definition: &ResourceDefinition,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> Result<Record, Self::Error> {
        let id = self.generate_record_id();
        info!(
            "Creating {} record '{}' (request: '{}')",
            definition.name(),
            id,
            context.request_id
        );
        trace!(
            "Create payload: {}",
            serde_json::to_string(payload).unwrap_or_else(|_| "invalid json".to_string())
        );

        let record = definition.build_record(&id, payload, Utc::now());
        let key = StorageKey::new(definition.table_name(), &id);
        let stored = self
            .storage
            .put(key, record.into_value())
            .await
            .map_err(ProviderError::storage)?;

        Self::to_record(stored)
    }

    async fn update_record(
        &self,
        definition: &ResourceDefinition,
        id: &str,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> Result<Record, Self::Error> {
        info!(
            "Updating {} record '{}' ({:?}, request: '{}')",
            definition.name(),
            id,
            definition.update_mode(),
            context.request_id
        );

        let changes = definition.update_changes(payload);
        trace!(
            "Update changes: set {:?}, remove {:?}",
            changes.set.keys().collect::<Vec<_>>(),
            changes.remove
        );

        let key = StorageKey::new(definition.table_name(), id);
        let updated = self
            .storage
            .update(key, changes)
            .await
            .map_err(ProviderError::storage)?;

        Self::to_record(updated)
    }

    async fn delete_record(
        &self,
        definition: &ResourceDefinition,
        id: &str,
        context: &RequestContext,
    ) -> Result<bool, Self::Error> {
        info!(
            "Deleting {} record '{}' (request: '{}')",
            definition.name(),
            id,
            context.request_id
        );

        let key = StorageKey::new(definition.table_name(), id);
        let existed = self
            .storage
            .delete(key)
            .await
            .map_err(ProviderError::storage)?;

        if !existed {
            debug!("{} record '{}' did not exist", definition.name(), id);
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::UpdateMode;
    use crate::resource_handlers::{events_resource, news_resource};
    use crate::storage::InMemoryStorage;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn context() -> RequestContext {
        RequestContext::new("test-request")
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let events = events_resource("events").unwrap();

        let record = provider
            .create_record(&events, &payload(json!({"title": "Sommerfest"})), &context())
            .await
            .unwrap();

        assert_eq!(record.get_str("title"), Some("Sommerfest"));
        assert_eq!(record.get_str("time"), Some("10:00"));
        let date = record.get_str("date").unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[2..3], ".");
        assert!(record.get_str("createdAt").unwrap().ends_with('Z'));
        assert!(uuid::Uuid::parse_str(record.id().unwrap()).is_ok());

        let stored = provider
            .storage()
            .get(StorageKey::new("events", record.id().unwrap()))
            .await
            .unwrap();
        assert_eq!(stored, Some(record.to_value()));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news").unwrap();

        let a = provider.create_record(&news, &Map::new(), &context()).await.unwrap();
        let b = provider.create_record(&news, &Map::new(), &context()).await.unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_update_merge_keeps_missing_fields() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news").unwrap();
        let created = provider
            .create_record(
                &news,
                &payload(json!({"title": "A", "content": "Text"})),
                &context(),
            )
            .await
            .unwrap();
        let id = created.id().unwrap().to_string();

        let updated = provider
            .update_record(&news, &id, &payload(json!({"title": "B"})), &context())
            .await
            .unwrap();

        assert_eq!(updated.get_str("title"), Some("B"));
        assert_eq!(updated.get_str("content"), Some("Text"));
        assert_eq!(updated.get("createdAt"), created.get("createdAt"));
    }

    #[tokio::test]
    async fn test_update_overwrite_removes_missing_fields() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news")
            .unwrap()
            .with_update_mode(UpdateMode::Overwrite);
        let created = provider
            .create_record(
                &news,
                &payload(json!({"title": "A", "content": "Text"})),
                &context(),
            )
            .await
            .unwrap();
        let id = created.id().unwrap().to_string();

        let updated = provider
            .update_record(&news, &id, &payload(json!({"title": "B"})), &context())
            .await
            .unwrap();

        assert_eq!(updated.get_str("title"), Some("B"));
        assert!(updated.get("content").is_none());
        assert!(updated.get("date").is_none());
        assert_eq!(updated.get("createdAt"), created.get("createdAt"));
    }

    #[tokio::test]
    async fn test_update_ignores_id_and_created_at() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news").unwrap();
        let created = provider.create_record(&news, &Map::new(), &context()).await.unwrap();
        let id = created.id().unwrap().to_string();

        let updated = provider
            .update_record(
                &news,
                &id,
                &payload(json!({"id": "other", "createdAt": "1999-01-01T00:00:00.000Z"})),
                &context(),
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), Some(id.as_str()));
        assert_eq!(updated.get("createdAt"), created.get("createdAt"));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news").unwrap();
        let created = provider.create_record(&news, &Map::new(), &context()).await.unwrap();
        let id = created.id().unwrap().to_string();

        assert!(provider.delete_record(&news, &id, &context()).await.unwrap());
        assert!(!provider.delete_record(&news, &id, &context()).await.unwrap());
        assert!(!provider.delete_record(&news, "missing", &context()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_is_bounded() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let news = news_resource("news").unwrap();
        for _ in 0..3 {
            provider.create_record(&news, &Map::new(), &context()).await.unwrap();
        }

        let all = provider.list_records(&news, 10, &context()).await.unwrap();
        assert_eq!(all.records.len(), 3);
        assert!(!all.truncated);

        let capped = provider.list_records(&news, 2, &context()).await.unwrap();
        assert_eq!(capped.records.len(), 2);
        assert!(capped.truncated);
    }
}
