//! Domain layer for the Spotlight directory
//!
//! Core models (users, casts, cache envelopes), error types and the port
//! traits that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{normalize_username, DomainError, DomainResult};
