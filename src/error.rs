//! Error types for resource server operations.
//!
//! [`CrudError`] is the error surfaced by the server and operation handler.
//! Lower layers have their own error types ([`StorageError`](crate::storage::StorageError),
//! [`ProviderError`](crate::providers::ProviderError)) which are folded into it.

use crate::providers::ProviderError;

/// Main error type for resource server operations.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// Errors from the resource provider (storage access, record conversion)
    #[error("Resource provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The requested resource is not registered with the server
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// The HTTP method has no operation mapped to it
    #[error("Unsupported method")]
    UnsupportedMethod { method: String },

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Invalid resource definition or server configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CrudError {
    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Whether the error was caused by the caller rather than by a fault
    /// while processing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CrudError::UnknownResource(_)
                | CrudError::UnsupportedMethod { .. }
                | CrudError::InvalidRequest { .. }
        )
    }
}

/// Result type alias for resource server operations.
pub type CrudResult<T> = Result<T, CrudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CrudError::UnknownResource("photos".to_string());
        assert_eq!(error.to_string(), "Unknown resource: photos");

        let error = CrudError::unsupported_method("PATCH");
        assert_eq!(error.to_string(), "Unsupported method");

        let error = CrudError::invalid_request("Missing resource id");
        assert_eq!(error.to_string(), "Invalid request: Missing resource id");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(CrudError::UnknownResource("x".into()).is_client_error());
        assert!(CrudError::unsupported_method("PATCH").is_client_error());
        assert!(CrudError::invalid_request("bad").is_client_error());
        assert!(!CrudError::configuration("empty table").is_client_error());

        let provider = ProviderError::Storage {
            message: "table unavailable".to_string(),
        };
        assert!(!CrudError::from(provider).is_client_error());
    }
}
