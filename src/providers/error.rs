//! Error types for resource provider implementations.
//!
//! This module provides the error type shared by resource provider
//! implementations, independent of the underlying storage backend.
//!
//! # Key Types
//!
//! - [`ProviderError`] - Generic provider error type for resource operations
//!
//! # Usage
//!
//! This error type is used with `StandardResourceProvider<T>` regardless of storage backend:
//!
//! ```rust
//! use kleingarten_server::providers::StandardResourceProvider;
//! use kleingarten_server::storage::InMemoryStorage;
//!
//! let storage = InMemoryStorage::new();
//! let provider = StandardResourceProvider::new(storage);
//! ```

use thiserror::Error;

/// Errors that can occur during resource provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Invalid resource data: {message}")]
    InvalidData {
        /// Description of the invalid data
        message: String,
    },

    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
    },
}

impl ProviderError {
    /// Wrap any storage backend error.
    pub fn storage(error: impl std::fmt::Display) -> Self {
        ProviderError::Storage {
            message: error.to_string(),
        }
    }
}
