//! AWS Lambda adapter for the HTTP front door.
//!
//! Converts `lambda_http` events into [`HttpRequest`] and renders
//! [`HttpResponse`] back. Requires the `lambda` feature.

use crate::http::{HttpFrontDoor, HttpRequest, HttpResponse};
use crate::providers::ProviderError;
use crate::resource::ResourceProvider;
use lambda_http::{Body, Error, Request, RequestExt, Response};

/// Lambda handler: route one API Gateway event through the front door.
pub async fn function_handler<P>(
    front_door: &HttpFrontDoor<P>,
    event: Request,
) -> Result<Response<Body>, Error>
where
    P: ResourceProvider + Sync,
    P::Error: Into<ProviderError>,
{
    let request = to_http_request(&event);
    let response = front_door.handle(request).await;
    to_lambda_response(response)
}

/// Convert a Lambda event into a transport-agnostic request.
pub fn to_http_request(event: &Request) -> HttpRequest {
    let mut request = HttpRequest::new(event.method().as_str(), event.uri().path());

    if let Some(id) = event.path_parameters().first("id") {
        request = request.with_path_parameter("id", id);
    }

    request.body = match event.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).ok(),
    };

    if let Some(context) = event.lambda_context_ref() {
        request = request.with_request_id(context.request_id.clone());
    }

    request
}

/// Render a transport-agnostic response as a Lambda response.
pub fn to_lambda_response(response: HttpResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let body = match response.body {
        Some(text) => Body::Text(text),
        None => Body::Empty,
    };
    Ok(builder.body(body)?)
}
