//! Transport-agnostic HTTP surface.
//!
//! [`HttpFrontDoor`] turns `{method, path, body}` into an operation request,
//! runs it through the [`CrudOperationHandler`](crate::operation_handler::CrudOperationHandler)
//! and renders the JSON response with CORS headers. Adapters for concrete
//! transports (see the `lambda` feature) only convert to and from
//! [`HttpRequest`] and [`HttpResponse`].

mod front_door;
mod message;

pub use front_door::HttpFrontDoor;
pub use message::{
    ALLOW_HEADERS, ALLOW_METHODS, HttpRequest, HttpResponse, TRUNCATED_HEADER,
    default_headers,
};
