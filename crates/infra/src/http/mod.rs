//! HTTP transport

pub mod client;
pub mod redact;

pub use client::{HttpClient, HttpClientBuilder};
pub use redact::redact_url;
