//! CRUD operation handlers
//!
//! This module contains the handlers for List, Create, Update and Delete.

use crate::{
    error::{CrudError, CrudResult},
    operation_handler::core::{
        CrudOperationHandler, OperationMetadata, OperationRequest, OperationResponse,
        OperationType,
    },
    providers::ProviderError,
    resource::{Record, RequestContext, ResourceProvider},
};
use log::debug;
use serde_json::{Map, Value};

/// Payloads that are not JSON objects count as empty partial records.
fn payload_map(data: Option<Value>) -> Map<String, Value> {
    match data {
        Some(Value::Object(map)) => map,
        Some(other) => {
            debug!("Ignoring non-object payload of type {}", json_type(&other));
            Map::new()
        }
        None => Map::new(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required_id(request: &OperationRequest) -> CrudResult<String> {
    request
        .resource_id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CrudError::invalid_request("Missing id"))
}

fn record_response(
    operation: OperationType,
    resource: String,
    record: Record,
    context: &RequestContext,
) -> OperationResponse {
    OperationResponse {
        success: true,
        error: None,
        error_code: None,
        metadata: OperationMetadata {
            operation: Some(operation),
            resource: Some(resource),
            resource_id: record.id().map(str::to_string),
            resource_count: Some(1),
            truncated: false,
            request_id: context.request_id.clone(),
        },
        data: Some(record.into_value()),
    }
}

/// Handle list operations.
pub async fn handle_list<P>(
    handler: &CrudOperationHandler<P>,
    request: OperationRequest,
    context: &RequestContext,
) -> CrudResult<OperationResponse>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    let outcome = handler
        .server()
        .list_records(&request.resource, context)
        .await?;

    let count = outcome.records.len();
    let items: Vec<Value> = outcome.records.into_iter().map(Record::into_value).collect();

    Ok(OperationResponse {
        success: true,
        data: Some(Value::Array(items)),
        error: None,
        error_code: None,
        metadata: OperationMetadata {
            operation: Some(OperationType::List),
            resource: Some(request.resource),
            resource_id: None,
            resource_count: Some(count),
            truncated: outcome.truncated,
            request_id: context.request_id.clone(),
        },
    })
}

/// Handle create operations.
pub async fn handle_create<P>(
    handler: &CrudOperationHandler<P>,
    request: OperationRequest,
    context: &RequestContext,
) -> CrudResult<OperationResponse>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    let payload = payload_map(request.data);
    let record = handler
        .server()
        .create_record(&request.resource, &payload, context)
        .await?;

    Ok(record_response(
        OperationType::Create,
        request.resource,
        record,
        context,
    ))
}

/// Handle update operations.
pub async fn handle_update<P>(
    handler: &CrudOperationHandler<P>,
    request: OperationRequest,
    context: &RequestContext,
) -> CrudResult<OperationResponse>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    // Unknown resources are reported before a missing id.
    handler.server().resource(&request.resource)?;
    let id = required_id(&request)?;
    let payload = payload_map(request.data);

    let record = handler
        .server()
        .update_record(&request.resource, &id, &payload, context)
        .await?;

    Ok(record_response(
        OperationType::Update,
        request.resource,
        record,
        context,
    ))
}

/// Handle delete operations.
pub async fn handle_delete<P>(
    handler: &CrudOperationHandler<P>,
    request: OperationRequest,
    context: &RequestContext,
) -> CrudResult<OperationResponse>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    handler.server().resource(&request.resource)?;
    let id = required_id(&request)?;

    handler
        .server()
        .delete_record(&request.resource, &id, context)
        .await?;

    Ok(OperationResponse {
        success: true,
        data: None,
        error: None,
        error_code: None,
        metadata: OperationMetadata {
            operation: Some(OperationType::Delete),
            resource: Some(request.resource),
            resource_id: Some(id),
            resource_count: None,
            truncated: false,
            request_id: context.request_id.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::crud_server::CrudServerBuilder;
    use crate::operation_handler::{
        CrudOperationHandler, INVALID_REQUEST, OperationRequest, OperationType, UNKNOWN_RESOURCE,
    };
    use crate::providers::StandardResourceProvider;
    use crate::resource_handlers::{ResourceTables, default_resources};
    use crate::storage::InMemoryStorage;
    use serde_json::{Value, json};

    fn handler() -> CrudOperationHandler<StandardResourceProvider<InMemoryStorage>> {
        let server = CrudServerBuilder::new(StandardResourceProvider::new(InMemoryStorage::new()))
            .with_resources(default_resources(&ResourceTables::default()).unwrap())
            .build()
            .unwrap();
        CrudOperationHandler::new(server)
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let handler = handler();

        let created = handler
            .handle_operation(
                OperationRequest::create("news", json!({"title": "Maifest"}))
                    .with_request_id("req-1"),
            )
            .await;
        assert!(created.success);
        assert_eq!(created.metadata.operation, Some(OperationType::Create));
        assert_eq!(created.metadata.request_id, "req-1");
        let data = created.data.unwrap();
        assert_eq!(data["title"], "Maifest");
        assert_eq!(created.metadata.resource_id.as_deref(), data["id"].as_str());

        let listed = handler.handle_operation(OperationRequest::list("news")).await;
        assert!(listed.success);
        assert_eq!(listed.metadata.resource_count, Some(1));
        assert!(!listed.metadata.truncated);
        assert_eq!(listed.data, Some(Value::Array(vec![data])));
    }

    #[tokio::test]
    async fn test_non_object_payload_counts_as_empty() {
        let handler = handler();
        let created = handler
            .handle_operation(OperationRequest::create("events", json!([1, 2, 3])))
            .await;
        assert!(created.success);
        let data = created.data.unwrap();
        assert_eq!(data["title"], "");
        assert_eq!(data["time"], "10:00");
    }

    #[tokio::test]
    async fn test_missing_id_and_unknown_resource() {
        let handler = handler();

        let response = handler
            .handle_operation(OperationRequest::delete("news", ""))
            .await;
        assert!(!response.success);
        assert_eq!(response.error_code.as_deref(), Some(INVALID_REQUEST));

        let response = handler
            .handle_operation(OperationRequest::update("users", "1", json!({})))
            .await;
        assert_eq!(response.error_code.as_deref(), Some(UNKNOWN_RESOURCE));

        let response = handler
            .handle_operation(OperationRequest::update("users", "", json!({})))
            .await;
        assert_eq!(response.error_code.as_deref(), Some(UNKNOWN_RESOURCE));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let handler = handler();
        let response = handler
            .handle_operation(OperationRequest::delete("events", "missing"))
            .await;
        assert!(response.success);
        assert!(response.data.is_none());
        assert_eq!(response.metadata.resource_id.as_deref(), Some("missing"));
    }
}
