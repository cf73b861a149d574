//! Operation handlers, one function per operation type.

pub mod crud;
