//! Routing of HTTP requests onto resource operations.

use super::message::{HttpRequest, HttpResponse, TRUNCATED_HEADER};
use crate::error::CrudError;
use crate::operation_handler::{
    CrudOperationHandler, OperationRequest, OperationResponse, OperationType,
    create_error_response, is_client_error_code,
};
use crate::providers::ProviderError;
use crate::resource::ResourceProvider;
use log::{debug, info};
use serde_json::{Map, Value};

/// HTTP front door over a [`CrudOperationHandler`].
///
/// | Method  | Path              | Success               |
/// |---------|-------------------|-----------------------|
/// | OPTIONS | any               | 200, empty            |
/// | GET     | `/{resource}`     | 200, array of records |
/// | POST    | `/{resource}`     | 201, created record   |
/// | PUT     | `/{resource}/{id}`| 200, updated record   |
/// | DELETE  | `/{resource}/{id}`| 204, empty            |
///
/// Caller faults (unknown resource, missing id, other methods) answer 400,
/// everything else 500. Every response carries the CORS headers.
pub struct HttpFrontDoor<P: ResourceProvider> {
    handler: CrudOperationHandler<P>,
}

impl<P> HttpFrontDoor<P>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    pub fn new(handler: CrudOperationHandler<P>) -> Self {
        Self { handler }
    }

    /// Borrow the operation handler.
    pub fn handler(&self) -> &CrudOperationHandler<P> {
        &self.handler
    }

    /// Handle one request. Never fails; faults become error responses.
    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let config = self.handler.server().config();
        let origin = config.allow_origin.as_str();
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "{} {} (request: '{}')",
            request.method, request.path, request_id
        );

        let method = request.method.to_ascii_uppercase();
        if method == "OPTIONS" {
            return HttpResponse::empty(200, origin);
        }

        let path = strip_prefix(&request.path, config.path_prefix.as_deref());
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let resource = segments.next().unwrap_or_default().to_string();
        let id = request
            .path_parameters
            .get("id")
            .cloned()
            .or_else(|| segments.next().map(str::to_string));

        let operation = match method.as_str() {
            "GET" => OperationType::List,
            "POST" => OperationType::Create,
            "PUT" => OperationType::Update,
            "DELETE" => OperationType::Delete,
            _ => {
                let response =
                    create_error_response(CrudError::unsupported_method(&request.method), request_id);
                return render(response, origin);
            }
        };

        let operation_request = OperationRequest {
            operation,
            resource,
            resource_id: id,
            data: match operation {
                OperationType::Create | OperationType::Update => {
                    Some(parse_body(request.body.as_deref()))
                }
                OperationType::List | OperationType::Delete => None,
            },
            request_id: Some(request_id),
        };

        let response = self.handler.handle_operation(operation_request).await;
        render(response, origin)
    }
}

fn strip_prefix<'a>(path: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix {
        Some(prefix) => match path.strip_prefix(prefix) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        },
        None => path,
    }
}

/// Malformed or missing bodies count as an empty partial record.
fn parse_body(body: Option<&str>) -> Value {
    match body.map(str::trim).filter(|body| !body.is_empty()) {
        Some(body) => match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => {
                debug!("Request body is not a JSON object, using empty record");
                Value::Object(Map::new())
            }
            Err(e) => {
                debug!("Malformed request body ({}), using empty record", e);
                Value::Object(Map::new())
            }
        },
        None => Value::Object(Map::new()),
    }
}

fn render(response: OperationResponse, origin: &str) -> HttpResponse {
    if !response.success {
        let status = match response.error_code.as_deref() {
            Some(code) if is_client_error_code(code) => 400,
            _ => 500,
        };
        return HttpResponse::error(status, response.error.as_deref().unwrap_or_default(), origin);
    }

    match response.metadata.operation {
        Some(OperationType::Delete) => HttpResponse::empty(204, origin),
        Some(operation) => {
            let status = if operation == OperationType::Create { 201 } else { 200 };
            let body = response.data.unwrap_or(Value::Null);
            let rendered = HttpResponse::json(status, &body, origin);
            if response.metadata.truncated {
                rendered.with_header(TRUNCATED_HEADER, "true")
            } else {
                rendered
            }
        }
        None => HttpResponse::error(500, "", origin),
    }
}
