//! Request context for resource operations.

use uuid::Uuid;

/// Request context for resource operations.
///
/// Carries the request identifier used to correlate log lines across the
/// front door, operation handler, provider and storage layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_ids() {
        let context = RequestContext::new("req-1");
        assert_eq!(context.request_id, "req-1");

        let a = RequestContext::with_generated_id();
        let b = RequestContext::with_generated_id();
        assert!(!a.request_id.is_empty());
        assert_ne!(a.request_id, b.request_id);
    }
}
