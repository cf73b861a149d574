//! Request builder utilities for OperationRequest
//!
//! This module provides convenient builder methods for constructing
//! OperationRequest instances for the different operation types.

use crate::operation_handler::core::{OperationRequest, OperationType};
use serde_json::Value;

impl OperationRequest {
    /// Create a new list operation request.
    pub fn list(resource: impl Into<String>) -> Self {
        Self {
            operation: OperationType::List,
            resource: resource.into(),
            resource_id: None,
            data: None,
            request_id: None,
        }
    }

    /// Create a new create operation request.
    pub fn create(resource: impl Into<String>, data: Value) -> Self {
        Self {
            operation: OperationType::Create,
            resource: resource.into(),
            resource_id: None,
            data: Some(data),
            request_id: None,
        }
    }

    /// Create a new update operation request.
    pub fn update(resource: impl Into<String>, resource_id: impl Into<String>, data: Value) -> Self {
        Self {
            operation: OperationType::Update,
            resource: resource.into(),
            resource_id: Some(resource_id.into()),
            data: Some(data),
            request_id: None,
        }
    }

    /// Create a new delete operation request.
    pub fn delete(resource: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            operation: OperationType::Delete,
            resource: resource.into(),
            resource_id: Some(resource_id.into()),
            data: None,
            request_id: None,
        }
    }

    /// Set the target record ID.
    pub fn with_resource_id(mut self, resource_id: Option<String>) -> Self {
        self.resource_id = resource_id;
        self
    }

    /// Set the request ID for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
