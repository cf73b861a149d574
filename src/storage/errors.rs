//! Storage-specific error types for pure data operations.
//!
//! These errors describe failures of the key-value backend itself and know
//! nothing about resources, field defaults or HTTP.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Data that cannot be stored or read back as a record.
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Misconfigured storage backend.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The remote store could not be reached or rejected the call.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Item encoding or decoding failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StorageError {
    /// Create a new InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a new Configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new Serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
