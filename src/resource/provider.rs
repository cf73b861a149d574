//! Resource provider trait for implementing CRUD data access.
//!
//! A provider executes the four resource operations against some store,
//! given the resource's [`ResourceDefinition`]. The design is async-first;
//! all futures are `Send` so providers can sit behind multi-threaded
//! front doors.

use super::context::RequestContext;
use super::definition::ResourceDefinition;
use super::record::Record;
use serde_json::{Map, Value};
use std::future::Future;

/// Result of a list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOutcome {
    /// Records in store order.
    pub records: Vec<Record>,
    /// Whether the list ceiling cut the result short.
    pub truncated: bool,
}

/// Resource provider trait for generic CRUD operations.
pub trait ResourceProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return up to `limit` records of the resource, unordered.
    fn list_records(
        &self,
        definition: &ResourceDefinition,
        limit: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<ListOutcome, Self::Error>> + Send;

    /// Create a record from a partial payload; the provider assigns the id.
    fn create_record(
        &self,
        definition: &ResourceDefinition,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Record, Self::Error>> + Send;

    /// Rewrite the updatable fields of a record and return it after the update.
    fn update_record(
        &self,
        definition: &ResourceDefinition,
        id: &str,
        payload: &Map<String, Value>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Record, Self::Error>> + Send;

    /// Delete a record; returns whether it existed.
    fn delete_record(
        &self,
        definition: &ResourceDefinition,
        id: &str,
        context: &RequestContext,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
