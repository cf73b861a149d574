//! Resource model: definitions, records, request context and the provider trait.
//!
//! # Key Types
//!
//! - [`ResourceDefinition`] - table name, fields and default rules of one resource
//! - [`ResourceDefinitionBuilder`] - fluent construction with validation
//! - [`Record`] - a stored record
//! - [`ResourceProvider`] - async CRUD operations over a definition

pub mod builder;
pub mod context;
pub mod definition;
pub mod provider;
pub mod record;

pub use builder::ResourceDefinitionBuilder;
pub use context::RequestContext;
pub use definition::{
    DateStyle, FieldDefault, FieldDefinition, ResourceDefinition, UpdateMode, normalize_value,
};
pub use provider::{ListOutcome, ResourceProvider};
pub use record::{Record, RecordId};
