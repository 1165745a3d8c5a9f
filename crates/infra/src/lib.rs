//! # Enforcement Infrastructure
//!
//! I/O side of the Enforcement API client.
//!
//! This crate contains:
//! - The HTTP transport wrapper
//! - The API client (`add_events`, `list_domains`, `delete_domain`)
//! - Configuration loading from environment and files
//! - Conversions from transport errors into domain errors
//!
//! ## Architecture
//! - Depends on `enforcement-domain` for the event model and error type
//! - Contains all "impure" code (network, filesystem)
//! - Emits `tracing` events; never installs a subscriber

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, DomainEntry, DomainRef, ListDomains};
pub use enforcement_domain as domain;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
