//! Protocol constants
//!
//! Centralized location for the fixed values the Enforcement API expects.

// Event protocol constants (the API currently accepts no other values)
pub const PROTOCOL_VERSION: &str = "1.0a";
pub const PROVIDER_NAME: &str = "Security Platform";

// API endpoint configuration
pub const DEFAULT_API_HOST: &str = "s-platform.api.opendns.com";
pub const DEFAULT_API_VERSION: &str = "1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Request parameter names
pub const CUSTOMER_KEY_PARAM: &str = "customerKey";
pub const PAGE_PARAM: &str = "page";
pub const DOMAIN_NAME_FILTER_PARAM: &str = "where[name]";

/// Build the base URL for an API version, e.g. `https://<host>/1.0`.
pub fn default_base_url(version: &str) -> String {
    format!("https://{DEFAULT_API_HOST}/{version}")
}
