//! Client configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{default_base_url, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS};
use crate::errors::{EnforcementError, Result};
use crate::utils::domain_name::DomainCheck;

/// Configuration for an Enforcement API client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Customer key issued by the vendor; sent with every request
    pub customer_key: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Overrides the base URL derived from `api_version`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub domain_check: DomainCheck,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(customer_key: impl Into<String>) -> Self {
        Self {
            customer_key: customer_key.into(),
            api_version: default_api_version(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            domain_check: DomainCheck::default(),
            user_agent: None,
        }
    }

    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_domain_check(mut self, domain_check: DomainCheck) -> Self {
        self.domain_check = domain_check;
        self
    }

    /// Base URL without a trailing slash
    pub fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(url) => url.clone(),
            None => default_base_url(&self.api_version),
        };
        base.trim_end_matches('/').to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check values that serde cannot reject on its own.
    ///
    /// # Errors
    /// Returns `EnforcementError::Config` for a blank customer key or API
    /// version, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.customer_key.trim().is_empty() {
            return Err(EnforcementError::Config("customer key must not be empty".into()));
        }
        if self.api_version.trim().is_empty() {
            return Err(EnforcementError::Config("API version must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(EnforcementError::Config("timeout must be at least one second".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_base_url_from_version() {
        let config = ClientConfig::new("1111-2222-3333-4444").with_api_version("1.1");
        assert_eq!(config.resolved_base_url(), "https://s-platform.api.opendns.com/1.1");
    }

    #[test]
    fn explicit_base_url_wins_and_is_trimmed() {
        let config = ClientConfig::new("key").with_base_url("http://127.0.0.1:8080/1.0/");
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:8080/1.0");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "customer_key": "abc" }"#).expect("config");

        assert_eq!(config.api_version, "1.0");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.domain_check, DomainCheck::Strict);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn rejects_blank_customer_key() {
        let err = ClientConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, EnforcementError::Config(_)));

        let mut zero_timeout = ClientConfig::new("key");
        zero_timeout.timeout_secs = 0;
        assert!(zero_timeout.validate().is_err());
    }
}
