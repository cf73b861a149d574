//! Error handling utilities for operation handlers

use crate::error::CrudError;
use crate::operation_handler::core::{OperationMetadata, OperationResponse};

pub const UNKNOWN_RESOURCE: &str = "UNKNOWN_RESOURCE";
pub const UNSUPPORTED_METHOD: &str = "UNSUPPORTED_METHOD";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";

/// Whether an error code describes a fault of the caller rather than the server.
pub fn is_client_error_code(code: &str) -> bool {
    matches!(code, UNKNOWN_RESOURCE | UNSUPPORTED_METHOD | INVALID_REQUEST)
}

/// Create an error response from a CrudError.
pub fn create_error_response(error: CrudError, request_id: String) -> OperationResponse {
    let (error_message, error_code) = match &error {
        CrudError::UnknownResource(_) => (error.to_string(), UNKNOWN_RESOURCE),
        CrudError::UnsupportedMethod { .. } => (error.to_string(), UNSUPPORTED_METHOD),
        CrudError::InvalidRequest { message } => (message.clone(), INVALID_REQUEST),
        CrudError::Provider(provider_error) => (provider_error.to_string(), PROVIDER_ERROR),
        CrudError::Configuration { message } => (message.clone(), CONFIGURATION_ERROR),
    };

    OperationResponse {
        success: false,
        data: None,
        error: Some(error_message),
        error_code: Some(error_code.to_string()),
        metadata: OperationMetadata {
            request_id,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;

    #[test]
    fn test_error_codes() {
        let response = create_error_response(CrudError::unsupported_method("PATCH"), "r1".into());
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Unsupported method"));
        assert_eq!(response.error_code.as_deref(), Some(UNSUPPORTED_METHOD));
        assert_eq!(response.metadata.request_id, "r1");

        let response = create_error_response(
            CrudError::Provider(ProviderError::Storage {
                message: "table missing".into(),
            }),
            "r2".into(),
        );
        assert_eq!(response.error.as_deref(), Some("Storage error: table missing"));
        assert_eq!(response.error_code.as_deref(), Some(PROVIDER_ERROR));
    }

    #[test]
    fn test_client_error_codes() {
        assert!(is_client_error_code(UNKNOWN_RESOURCE));
        assert!(is_client_error_code(INVALID_REQUEST));
        assert!(!is_client_error_code(PROVIDER_ERROR));
        assert!(!is_client_error_code(CONFIGURATION_ERROR));
    }
}
