//! Shared helpers for the integration tests.

#![allow(dead_code)]

use kleingarten_server::http::{HttpFrontDoor, HttpRequest, HttpResponse};
use kleingarten_server::operation_handler::CrudOperationHandler;
use kleingarten_server::providers::StandardResourceProvider;
use kleingarten_server::resource::UpdateMode;
use kleingarten_server::resource_handlers::{
    DEFAULT_EVENTS_TABLE, DEFAULT_NEWS_TABLE, events_resource, news_resource,
};
use kleingarten_server::storage::{
    AttributeChanges, InMemoryStorage, ScanPage, StorageError, StorageKey, StorageProvider,
};
use kleingarten_server::{CrudServerBuilder, ServerConfig};
use serde_json::Value;

pub type MemoryFrontDoor = HttpFrontDoor<StandardResourceProvider<InMemoryStorage>>;

/// Route `log` output through the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Front door over the given storage with both resources registered.
pub fn front_door_with(
    storage: InMemoryStorage,
    update_mode: UpdateMode,
    config: ServerConfig,
) -> MemoryFrontDoor {
    init_logging();
    let news = news_resource(DEFAULT_NEWS_TABLE)
        .unwrap()
        .with_update_mode(update_mode);
    let events = events_resource(DEFAULT_EVENTS_TABLE)
        .unwrap()
        .with_update_mode(update_mode);
    let server = CrudServerBuilder::new(StandardResourceProvider::new(storage))
        .with_config(config)
        .with_resource(news)
        .with_resource(events)
        .build()
        .unwrap();
    HttpFrontDoor::new(CrudOperationHandler::new(server))
}

/// Front door over fresh in-memory storage with default settings.
pub fn front_door() -> MemoryFrontDoor {
    front_door_with(
        InMemoryStorage::new(),
        UpdateMode::Merge,
        ServerConfig::default(),
    )
}

pub async fn send(
    front_door: &MemoryFrontDoor,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> HttpResponse {
    let mut request = HttpRequest::new(method, path);
    if let Some(body) = body {
        request = request.with_body(body);
    }
    front_door.handle(request).await
}

pub fn body(response: &HttpResponse) -> Value {
    response
        .json_body()
        .unwrap_or_else(|| panic!("expected JSON body, got {:?}", response.body))
}

pub fn assert_cors_headers(response: &HttpResponse) {
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(
        response.header("Access-Control-Allow-Headers"),
        Some("Content-Type,Authorization")
    );
    assert_eq!(
        response.header("Access-Control-Allow-Methods"),
        Some("GET,POST,PUT,DELETE,OPTIONS")
    );
}

/// Today's UTC date as `(YYYY-MM-DD, DD.MM.YYYY)`.
pub fn today() -> (String, String) {
    let now = chrono::Utc::now();
    (
        now.format("%Y-%m-%d").to_string(),
        now.format("%d.%m.%Y").to_string(),
    )
}

/// Storage whose every call fails as if the table were offline.
#[derive(Debug, Clone, Default)]
pub struct OfflineStorage;

impl StorageProvider for OfflineStorage {
    type Error = StorageError;

    async fn put(&self, _key: StorageKey, _data: Value) -> Result<Value, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn get(&self, _key: StorageKey) -> Result<Option<Value>, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn update(
        &self,
        _key: StorageKey,
        _changes: AttributeChanges,
    ) -> Result<Value, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn delete(&self, _key: StorageKey) -> Result<bool, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn scan(&self, _table: &str, _limit: usize) -> Result<ScanPage, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn count(&self, _table: &str) -> Result<usize, Self::Error> {
        Err(StorageError::network("table offline"))
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        Err(StorageError::network("table offline"))
    }
}

pub fn offline_front_door() -> HttpFrontDoor<StandardResourceProvider<OfflineStorage>> {
    init_logging();
    let server = CrudServerBuilder::new(StandardResourceProvider::new(OfflineStorage))
        .with_resource(news_resource(DEFAULT_NEWS_TABLE).unwrap())
        .with_resource(events_resource(DEFAULT_EVENTS_TABLE).unwrap())
        .build()
        .unwrap();
    HttpFrontDoor::new(CrudOperationHandler::new(server))
}
