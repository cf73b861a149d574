//! Builder pattern for configuring resource server instances.
//!
//! This module provides the server configuration (list ceiling, path prefix,
//! CORS origin) and a fluent builder that registers resources and validates
//! the configuration before the server is created.

use crate::crud_server::CrudServer;
use crate::error::CrudError;
use crate::resource::{ResourceDefinition, ResourceProvider};
use std::env;

/// Default ceiling on the number of records a list returns.
pub const DEFAULT_MAX_LIST_ITEMS: usize = 1000;

/// Configuration for the resource server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Maximum number of records a list operation returns.
    pub max_list_items: usize,
    /// Path prefix stripped before routing, e.g. an API stage like `/api`.
    pub path_prefix: Option<String>,
    /// Value of the `Access-Control-Allow-Origin` response header.
    pub allow_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_list_items: DEFAULT_MAX_LIST_ITEMS,
            path_prefix: None,
            allow_origin: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `MAX_LIST_ITEMS` and `API_PATH_PREFIX` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Configuration`] if `MAX_LIST_ITEMS` is not a
    /// number or the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, CrudError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CrudError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("MAX_LIST_ITEMS").filter(|v| !v.trim().is_empty()) {
            config.max_list_items = raw.trim().parse().map_err(|_| {
                CrudError::configuration(format!("MAX_LIST_ITEMS must be a number, got '{}'", raw))
            })?;
        }

        config.path_prefix = lookup("API_PATH_PREFIX")
            .map(|prefix| prefix.trim().trim_end_matches('/').to_string())
            .filter(|prefix| !prefix.is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CrudError> {
        if self.max_list_items == 0 {
            return Err(CrudError::configuration(
                "max_list_items must be greater than zero",
            ));
        }
        if let Some(prefix) = &self.path_prefix {
            if !prefix.starts_with('/') || prefix.ends_with('/') {
                return Err(CrudError::configuration(format!(
                    "Path prefix '{}' must start with '/' and not end with '/'",
                    prefix
                )));
            }
        }
        if self.allow_origin.trim().is_empty() {
            return Err(CrudError::configuration("CORS origin cannot be empty"));
        }
        Ok(())
    }
}

/// Builder for configuring and creating resource server instances.
///
/// # Examples
///
/// ```rust
/// use kleingarten_server::CrudServerBuilder;
/// use kleingarten_server::providers::StandardResourceProvider;
/// use kleingarten_server::resource_handlers::{ResourceTables, default_resources};
/// use kleingarten_server::storage::InMemoryStorage;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StandardResourceProvider::new(InMemoryStorage::new());
/// let server = CrudServerBuilder::new(provider)
///     .with_resources(default_resources(&ResourceTables::default())?)
///     .with_path_prefix("/api")
///     .with_max_list_items(500)
///     .build()?;
///
/// assert_eq!(server.resource_names(), vec!["events", "news"]);
/// # Ok(())
/// # }
/// ```
pub struct CrudServerBuilder<P> {
    provider: P,
    config: ServerConfig,
    resources: Vec<ResourceDefinition>,
}

impl<P: ResourceProvider> CrudServerBuilder<P> {
    /// Create a new builder with default configuration and no resources.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: ServerConfig::default(),
            resources: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the list ceiling.
    pub fn with_max_list_items(mut self, max_list_items: usize) -> Self {
        self.config.max_list_items = max_list_items;
        self
    }

    /// Set the path prefix stripped before routing.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.path_prefix = Some(prefix.into());
        self
    }

    /// Set the CORS allowed origin.
    pub fn with_allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.allow_origin = origin.into();
        self
    }

    /// Register a resource.
    pub fn with_resource(mut self, definition: ResourceDefinition) -> Self {
        self.resources.push(definition);
        self
    }

    /// Register several resources.
    pub fn with_resources(mut self, definitions: impl IntoIterator<Item = ResourceDefinition>) -> Self {
        self.resources.extend(definitions);
        self
    }

    /// Build the configured server.
    ///
    /// # Errors
    ///
    /// Returns a [`CrudError::Configuration`] if the configuration is invalid
    /// or two resources share a name.
    pub fn build(self) -> Result<CrudServer<P>, CrudError> {
        let mut server = CrudServer::with_config(self.provider, self.config)?;
        for definition in self.resources {
            server.register_resource(definition)?;
        }
        Ok(server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StandardResourceProvider;
    use crate::resource_handlers::news_resource;
    use crate::storage::InMemoryStorage;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.max_list_items, DEFAULT_MAX_LIST_ITEMS);
        assert_eq!(config.allow_origin, "*");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup() {
        let config =
            ServerConfig::from_lookup(lookup(&[("MAX_LIST_ITEMS", "50"), ("API_PATH_PREFIX", "/api/")]))
                .unwrap();
        assert_eq!(config.max_list_items, 50);
        assert_eq!(config.path_prefix.as_deref(), Some("/api"));

        let empty = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(empty, ServerConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("MAX_LIST_ITEMS", "many")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("MAX_LIST_ITEMS", "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("API_PATH_PREFIX", "api")])).is_err());
    }

    #[test]
    fn test_builder_validates() {
        let provider = StandardResourceProvider::new(InMemoryStorage::new());
        let result = CrudServerBuilder::new(provider.clone())
            .with_max_list_items(0)
            .build();
        assert!(result.is_err());

        let result = CrudServerBuilder::new(provider)
            .with_resource(news_resource("a").unwrap())
            .with_resource(news_resource("b").unwrap())
            .build();
        assert!(matches!(result, Err(CrudError::Configuration { .. })));
    }
}
