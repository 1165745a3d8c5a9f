//! Enforcement API client
//!
//! This module provides the HTTP client for the vendor's event ingestion
//! API. It handles customer-key authentication, event submission, domain
//! listing with cursor pagination, and domain deletion.
//!
//! # Architecture
//!
//! - Uses [`HttpClient`](crate::http::HttpClient) (no direct reqwest calls)
//! - Customer key sent as a query parameter on every request
//! - Per-call query parameters are typed structs, never free-form maps
//! - No retries: every failure is returned to the caller
//! - Structured tracing only; the customer key is redacted from logs

pub mod client;
pub mod query;
pub mod types;

pub use client::{ApiClient, ListDomains};
pub use query::{AuthQuery, DomainNameFilter, DomainsPageQuery};
pub use types::{DomainEntry, DomainPage, DomainRef, EventBatchResponse, PageMeta};
