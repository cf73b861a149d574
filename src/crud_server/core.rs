//! Core server structure and initialization.

use crate::crud_server::builder::ServerConfig;
use crate::error::CrudError;
use crate::resource::{ResourceDefinition, ResourceProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Resource server coordinating the provider and the registered resources.
///
/// # Type Parameters
///
/// * `P` - The resource provider type that implements [`ResourceProvider`]
///
/// # Examples
///
/// ```rust
/// use kleingarten_server::{CrudServer, providers::StandardResourceProvider};
/// use kleingarten_server::resource_handlers::news_resource;
/// use kleingarten_server::storage::InMemoryStorage;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StandardResourceProvider::new(InMemoryStorage::new());
/// let mut server = CrudServer::new(provider)?;
/// server.register_resource(news_resource("kleingartenverein-news")?)?;
/// assert!(server.has_resource("news"));
/// # Ok(())
/// # }
/// ```
pub struct CrudServer<P> {
    pub(super) provider: P,
    pub(super) resources: HashMap<String, Arc<ResourceDefinition>>,
    pub(super) config: ServerConfig,
}

impl<P: ResourceProvider> CrudServer<P> {
    /// Create a server with the default configuration and no resources.
    pub fn new(provider: P) -> Result<Self, CrudError> {
        Self::with_config(provider, ServerConfig::default())
    }

    /// Create a server with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Configuration`] if the configuration is invalid.
    pub fn with_config(provider: P, config: ServerConfig) -> Result<Self, CrudError> {
        config.validate()?;
        Ok(Self {
            provider,
            resources: HashMap::new(),
            config,
        })
    }

    /// Get a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
