//! Resource provider implementations.
//!
//! * [`StandardResourceProvider`] - provider with pluggable storage backends
//!
//! The provider applies a resource's field defaults and update rules and
//! delegates persistence to a [`StorageProvider`](crate::storage::StorageProvider).

pub mod error;
pub mod standard;

pub use error::ProviderError;
pub use standard::StandardResourceProvider;
