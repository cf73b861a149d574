//! Request and response messages of the HTTP surface.

use serde_json::{Value, json};
use std::collections::HashMap;

/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
/// Header set on list responses cut short by the list ceiling.
pub const TRUNCATED_HEADER: &str = "X-Result-Truncated";

const FALLBACK_ERROR: &str = "Internal server error";

/// An incoming HTTP request, independent of the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    /// Path parameters already extracted by the transport, e.g. `id`.
    pub path_parameters: HashMap<String, String>,
    pub body: Option<String>,
    pub request_id: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// An outgoing HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Headers carried by every response.
pub fn default_headers(allow_origin: &str) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Access-Control-Allow-Origin".to_string(),
            allow_origin.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        ),
    ]
}

impl HttpResponse {
    /// Response without a body.
    pub fn empty(status: u16, allow_origin: &str) -> Self {
        Self {
            status,
            headers: default_headers(allow_origin),
            body: None,
        }
    }

    /// Response with a JSON body.
    pub fn json(status: u16, body: &Value, allow_origin: &str) -> Self {
        match serde_json::to_string(body) {
            Ok(text) => Self {
                status,
                headers: default_headers(allow_origin),
                body: Some(text),
            },
            Err(e) => Self::error(500, &e.to_string(), allow_origin),
        }
    }

    /// Error response with body `{"error": message}`.
    ///
    /// An empty message is replaced by a generic text.
    pub fn error(status: u16, message: &str, allow_origin: &str) -> Self {
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR
        } else {
            message
        };
        Self {
            status,
            headers: default_headers(allow_origin),
            body: Some(json!({ "error": message }).to_string()),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parse the body as JSON.
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_fallback() {
        let response = HttpResponse::error(500, "", "*");
        assert_eq!(response.status, 500);
        assert_eq!(
            response.json_body(),
            Some(json!({"error": "Internal server error"}))
        );
    }

    #[test]
    fn test_headers_case_insensitive() {
        let response = HttpResponse::empty(204, "https://verein.example")
            .with_header(TRUNCATED_HEADER, "true");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(
            response.header("access-control-allow-origin"),
            Some("https://verein.example")
        );
        assert_eq!(response.header("x-result-truncated"), Some("true"));
        assert!(response.body.is_none());
    }
}
