//! Parameterized tests for storage providers.
//!
//! Every `StorageProvider` implementation should pass this suite; it pins the
//! put/update/delete/scan semantics the provider layer relies on.

use super::{AttributeChanges, StorageError, StorageKey, StorageProvider};
use serde_json::json;

/// Test suite for any StorageProvider implementation.
pub async fn test_storage_provider<S>(storage: S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    test_put_and_get(&storage).await;
    test_get_nonexistent(&storage).await;
    test_put_replaces(&storage).await;
    test_update_sets_and_removes(&storage).await;
    test_update_upserts_missing(&storage).await;
    test_update_keeps_key(&storage).await;
    test_delete_idempotent(&storage).await;
    test_scan_bounded(&storage).await;
    test_table_isolation(&storage).await;
    test_clear(&storage).await;
}

async fn test_put_and_get<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("news", "123");
    let data = json!({"id": "123", "title": "Maifest"});

    let stored = storage.put(key.clone(), data.clone()).await.unwrap();
    assert_eq!(stored, data);

    let retrieved = storage.get(key).await.unwrap();
    assert_eq!(retrieved, Some(data));
}

async fn test_get_nonexistent<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let result = storage.get(StorageKey::new("news", "999")).await.unwrap();
    assert!(result.is_none());
}

async fn test_put_replaces<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("news", "1");
    storage
        .put(key.clone(), json!({"id": "1", "title": "old", "content": "X"}))
        .await
        .unwrap();
    storage
        .put(key.clone(), json!({"id": "1", "title": "new"}))
        .await
        .unwrap();

    let retrieved = storage.get(key).await.unwrap().unwrap();
    assert_eq!(retrieved, json!({"id": "1", "title": "new"}));
}

async fn test_update_sets_and_removes<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("news", "42");
    storage
        .put(
            key.clone(),
            json!({"id": "42", "title": "Old", "content": "X", "createdAt": "2024-01-01T00:00:00.000Z"}),
        )
        .await
        .unwrap();

    let changes = AttributeChanges::new()
        .set("title", json!("Updated"))
        .remove("content");
    let updated = storage.update(key.clone(), changes).await.unwrap();

    assert_eq!(updated["title"], "Updated");
    assert!(updated.get("content").is_none());
    assert_eq!(updated["createdAt"], "2024-01-01T00:00:00.000Z");
    assert_eq!(storage.get(key).await.unwrap(), Some(updated));
}

async fn test_update_upserts_missing<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("events", "7");
    let updated = storage
        .update(key.clone(), AttributeChanges::new().set("title", json!("Maifest")))
        .await
        .unwrap();

    assert_eq!(updated, json!({"id": "7", "title": "Maifest"}));
    assert_eq!(storage.count("events").await.unwrap(), 1);
}

async fn test_update_keeps_key<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("events", "8");
    storage
        .put(key.clone(), json!({"id": "8", "title": "Maifest"}))
        .await
        .unwrap();

    let changes = AttributeChanges::new().set("id", json!("hijacked")).remove("id");
    let updated = storage.update(key, changes).await.unwrap();
    assert_eq!(updated["id"], "8");
}

async fn test_delete_idempotent<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    let key = StorageKey::new("news", "123");
    storage
        .put(key.clone(), json!({"id": "123"}))
        .await
        .unwrap();

    assert!(storage.delete(key.clone()).await.unwrap());
    assert!(!storage.delete(key.clone()).await.unwrap());
    assert!(storage.get(key).await.unwrap().is_none());
}

async fn test_scan_bounded<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    for i in 0..5 {
        let id = i.to_string();
        storage
            .put(StorageKey::new("news", &id), json!({"id": id}))
            .await
            .unwrap();
    }

    let page = storage.scan("news", 10).await.unwrap();
    assert_eq!(page.items.len(), 5);
    assert!(!page.truncated);

    let page = storage.scan("news", 5).await.unwrap();
    assert_eq!(page.items.len(), 5);
    assert!(!page.truncated);

    let page = storage.scan("news", 3).await.unwrap();
    assert_eq!(page.items.len(), 3);
    assert!(page.truncated);

    let page = storage.scan("missing-table", 10).await.unwrap();
    assert!(page.items.is_empty());
    assert!(!page.truncated);
}

async fn test_table_isolation<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage.clear().await.unwrap();
    storage
        .put(StorageKey::new("news", "1"), json!({"id": "1", "title": "news"}))
        .await
        .unwrap();
    storage
        .put(StorageKey::new("events", "1"), json!({"id": "1", "title": "event"}))
        .await
        .unwrap();

    let news = storage.get(StorageKey::new("news", "1")).await.unwrap().unwrap();
    let event = storage.get(StorageKey::new("events", "1")).await.unwrap().unwrap();
    assert_eq!(news["title"], "news");
    assert_eq!(event["title"], "event");

    storage.delete(StorageKey::new("news", "1")).await.unwrap();
    assert_eq!(storage.count("news").await.unwrap(), 0);
    assert_eq!(storage.count("events").await.unwrap(), 1);
}

async fn test_clear<S>(storage: &S)
where
    S: StorageProvider<Error = StorageError> + Send + Sync,
{
    storage
        .put(StorageKey::new("news", "x"), json!({"id": "x"}))
        .await
        .unwrap();
    storage.clear().await.unwrap();
    assert_eq!(storage.count("news").await.unwrap(), 0);
    assert_eq!(storage.count("events").await.unwrap(), 0);
}
