//! Resource registration and lookup.

use super::core::CrudServer;
use crate::error::{CrudError, CrudResult};
use crate::resource::{ResourceDefinition, ResourceProvider};
use log::debug;
use std::sync::Arc;

impl<P: ResourceProvider> CrudServer<P> {
    /// Register a resource definition under its name.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Configuration`] if a resource with the same name
    /// is already registered.
    pub fn register_resource(&mut self, definition: ResourceDefinition) -> CrudResult<()> {
        let name = definition.name().to_string();
        if self.resources.contains_key(&name) {
            return Err(CrudError::configuration(format!(
                "Resource '{}' is already registered",
                name
            )));
        }
        debug!(
            "Registering resource '{}' on table '{}'",
            name,
            definition.table_name()
        );
        self.resources.insert(name, Arc::new(definition));
        Ok(())
    }

    /// Look up a registered resource.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::UnknownResource`] if no resource has that name.
    pub fn resource(&self, name: &str) -> CrudResult<Arc<ResourceDefinition>> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| CrudError::UnknownResource(name.to_string()))
    }

    /// Whether a resource with that name is registered.
    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Names of all registered resources, sorted.
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
