//! Core operation handler infrastructure
//!
//! This module contains the foundational types and the dispatcher for
//! resource operations.

use crate::crud_server::CrudServer;
use crate::providers::ProviderError;
use crate::resource::{RequestContext, ResourceProvider};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Framework-agnostic operation handler for resource operations
///
/// This handler provides a structured interface for performing operations
/// without being tied to any specific transport layer.
pub struct CrudOperationHandler<P: ResourceProvider> {
    pub(super) server: CrudServer<P>,
}

/// Structured request for a resource operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    /// The type of operation to perform
    pub operation: OperationType,
    /// The resource name (e.g., "news", "events")
    pub resource: String,
    /// Record ID for operations that target a specific record
    pub resource_id: Option<String>,
    /// Partial record for create/update operations
    pub data: Option<Value>,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Types of operations supported by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// List all records of a resource
    List,
    /// Create a new record
    Create,
    /// Update an existing record
    Update,
    /// Delete a record
    Delete,
}

/// Structured response from an operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// The primary data returned by the operation
    pub data: Option<Value>,
    /// Error message if the operation failed
    pub error: Option<String>,
    /// Error code for programmatic handling
    pub error_code: Option<String>,
    /// Additional metadata about the operation
    pub metadata: OperationMetadata,
}

/// Metadata about an operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationMetadata {
    /// Operation that produced the response, if it was dispatched
    pub operation: Option<OperationType>,
    /// Resource involved in the operation
    pub resource: Option<String>,
    /// Record ID if applicable
    pub resource_id: Option<String>,
    /// Number of records returned (for list operations)
    pub resource_count: Option<usize>,
    /// Whether the list ceiling cut the result short
    pub truncated: bool,
    /// Request ID for tracing
    pub request_id: String,
}

impl<P> CrudOperationHandler<P>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    /// Create a new operation handler with the given server.
    pub fn new(server: CrudServer<P>) -> Self {
        Self { server }
    }

    /// Handle a structured operation request.
    ///
    /// This is the main entry point that dispatches to the specific operation
    /// handlers. Failures are converted into error responses; this never
    /// returns an error itself.
    pub async fn handle_operation(&self, request: OperationRequest) -> OperationResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "Operation handler processing {:?} for {} (request: '{}')",
            request.operation, request.resource, request_id
        );

        let context = RequestContext::new(request_id.clone());

        let result = match request.operation {
            OperationType::List => super::handlers::crud::handle_list(self, request, &context).await,
            OperationType::Create => {
                super::handlers::crud::handle_create(self, request, &context).await
            }
            OperationType::Update => {
                super::handlers::crud::handle_update(self, request, &context).await
            }
            OperationType::Delete => {
                super::handlers::crud::handle_delete(self, request, &context).await
            }
        };

        match &result {
            Ok(_) => {
                debug!(
                    "Operation handler completed successfully (request: '{}')",
                    request_id
                );
            }
            Err(e) if e.is_client_error() => {
                warn!("Operation rejected: {} (request: '{}')", e, request_id);
            }
            Err(e) => {
                error!("Operation failed: {} (request: '{}')", e, request_id);
            }
        }

        result.unwrap_or_else(|e| super::errors::create_error_response(e, request_id))
    }

    /// Get access to the underlying server.
    pub fn server(&self) -> &CrudServer<P> {
        &self.server
    }
}
