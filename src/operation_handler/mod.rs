//! Framework-agnostic resource operation handler.
//!
//! This module provides structured request/response handling for the four
//! resource operations, independent of the transport that delivers them.
//!
//! # Key Types
//!
//! - [`CrudOperationHandler`] - Main handler for processing operations
//! - [`OperationRequest`] - Structured request wrapper
//! - [`OperationResponse`] - Response with metadata and error codes
//!
//! # Examples
//!
//! ```rust,no_run
//! use kleingarten_server::operation_handler::{CrudOperationHandler, OperationRequest};
//! use kleingarten_server::{CrudServerBuilder, providers::StandardResourceProvider};
//! use kleingarten_server::resource_handlers::{ResourceTables, default_resources};
//! use kleingarten_server::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = StandardResourceProvider::new(InMemoryStorage::new());
//! let server = CrudServerBuilder::new(provider)
//!     .with_resources(default_resources(&ResourceTables::default())?)
//!     .build()?;
//! let handler = CrudOperationHandler::new(server);
//!
//! let request = OperationRequest::create("events", json!({"title": "Sommerfest"}));
//! let response = handler.handle_operation(request).await;
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;

pub use core::{
    CrudOperationHandler, OperationMetadata, OperationRequest, OperationResponse, OperationType,
};

pub use errors::{
    CONFIGURATION_ERROR, INVALID_REQUEST, PROVIDER_ERROR, UNKNOWN_RESOURCE, UNSUPPORTED_METHOD,
    create_error_response, is_client_error_code,
};
