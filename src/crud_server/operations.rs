//! Resource CRUD operations for the server.
//!
//! Each operation resolves the resource definition by name and delegates to
//! the provider. Provider errors are folded into [`CrudError::Provider`].

use super::core::CrudServer;
use crate::error::{CrudError, CrudResult};
use crate::providers::ProviderError;
use crate::resource::{ListOutcome, Record, RequestContext, ResourceProvider};
use serde_json::{Map, Value};

impl<P> CrudServer<P>
where
    P: ResourceProvider,
    P::Error: Into<ProviderError>,
{
    /// List the records of a resource, bounded by `max_list_items`.
    pub async fn list_records(
        &self,
        resource: &str,
        context: &RequestContext,
    ) -> CrudResult<ListOutcome> {
        let definition = self.resource(resource)?;
        self.provider
            .list_records(&definition, self.config.max_list_items, context)
            .await
            .map_err(|e| CrudError::Provider(e.into()))
    }

    /// Create a record from a partial payload.
    pub async fn create_record(
        &self,
        resource: &str,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> CrudResult<Record> {
        let definition = self.resource(resource)?;
        self.provider
            .create_record(&definition, payload, context)
            .await
            .map_err(|e| CrudError::Provider(e.into()))
    }

    /// Update the updatable fields of a record.
    pub async fn update_record(
        &self,
        resource: &str,
        id: &str,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> CrudResult<Record> {
        let definition = self.resource(resource)?;
        if id.is_empty() {
            return Err(CrudError::invalid_request("Missing id"));
        }
        self.provider
            .update_record(&definition, id, payload, context)
            .await
            .map_err(|e| CrudError::Provider(e.into()))
    }

    /// Delete a record. Deleting a missing record succeeds.
    pub async fn delete_record(
        &self,
        resource: &str,
        id: &str,
        context: &RequestContext,
    ) -> CrudResult<()> {
        let definition = self.resource(resource)?;
        if id.is_empty() {
            return Err(CrudError::invalid_request("Missing id"));
        }
        self.provider
            .delete_record(&definition, id, context)
            .await
            .map_err(|e| CrudError::Provider(e.into()))?;
        Ok(())
    }
}
