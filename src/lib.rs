//! Resource CRUD server for a club website's news and events.
//!
//! Provides one generic, definition-driven resource handler with an
//! async-first provider layer, pluggable key-value storage backends, a
//! transport-agnostic HTTP surface and a client-side view model with an
//! explicit offline fallback.
//!
//! # Core Components
//!
//! - [`CrudServer`] - Registered resources plus the provider executing their operations
//! - [`ResourceDefinition`] - Table, fields and default rules of one resource
//! - [`ResourceProvider`] - Trait for executing resource operations
//! - [`http::HttpFrontDoor`] - `{method, path, body}` routing with CORS headers
//! - [`client::ResourceView`] - Client-side list with degraded fallback
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kleingarten_server::{CrudServerBuilder, providers::StandardResourceProvider};
//! use kleingarten_server::http::{HttpFrontDoor, HttpRequest};
//! use kleingarten_server::operation_handler::CrudOperationHandler;
//! use kleingarten_server::resource_handlers::{ResourceTables, default_resources};
//! use kleingarten_server::storage::InMemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = StandardResourceProvider::new(InMemoryStorage::new());
//! let server = CrudServerBuilder::new(provider)
//!     .with_resources(default_resources(&ResourceTables::default())?)
//!     .build()?;
//! let front_door = HttpFrontDoor::new(CrudOperationHandler::new(server));
//!
//! let response = front_door
//!     .handle(HttpRequest::new("POST", "/events").with_body(r#"{"title":"Sommerfest"}"#))
//!     .await;
//! assert_eq!(response.status, 201);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `dynamodb` - [`storage::DynamoDbStorage`] backed by `aws-sdk-dynamodb`
//! - `lambda` - AWS Lambda adapter for the HTTP surface

pub mod client;
pub mod crud_server;
pub mod error;
pub mod http;
/// AWS Lambda integration.
///
/// This module is only available when the `lambda` feature is enabled.
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod operation_handler;
pub mod providers;
pub mod resource;
pub mod resource_handlers;
pub mod storage;

// Re-export commonly used types for convenience
pub use crud_server::{CrudServer, CrudServerBuilder, ServerConfig};
pub use error::{CrudError, CrudResult};
pub use resource::{
    Record, RecordId, RequestContext, ResourceDefinition, ResourceDefinitionBuilder,
    ResourceProvider, UpdateMode,
};

pub use operation_handler::{
    CrudOperationHandler, OperationMetadata, OperationRequest, OperationResponse,
};
pub use resource_handlers::{events_resource, news_resource};
