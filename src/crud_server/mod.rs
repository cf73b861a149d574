//! Resource server with runtime resource registration.
//!
//! The server holds the resource provider, the registered resource
//! definitions and the server configuration. It is the single entry point
//! for the four resource operations; transport concerns live in
//! [`operation_handler`](crate::operation_handler) and [`http`](crate::http).
//!
//! # Module Organization
//!
//! * [`core`] - Core CrudServer struct and initialization
//! * [`builder`] - Server configuration and builder
//! * [`registration`] - Resource registration and lookup
//! * [`operations`] - List, create, update and delete

pub mod builder;
pub mod core;
pub mod operations;
pub mod registration;

pub use builder::{CrudServerBuilder, DEFAULT_MAX_LIST_ITEMS, ServerConfig};
pub use core::CrudServer;
