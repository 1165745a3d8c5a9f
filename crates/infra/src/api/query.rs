//! Typed query parameters
//!
//! Each endpoint declares exactly which parameters it sends. They are
//! serialized with serde and appended after the customer key.

use serde::Serialize;

/// Credential attached to every request
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuthQuery<'a> {
    #[serde(rename = "customerKey")]
    pub customer_key: &'a str,
}

/// `GET /domains` page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainsPageQuery {
    pub page: u32,
}

/// `DELETE /domains` filter by domain name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainNameFilter<'a> {
    #[serde(rename = "where[name]")]
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use enforcement_domain::constants::{CUSTOMER_KEY_PARAM, DOMAIN_NAME_FILTER_PARAM, PAGE_PARAM};
    use serde_json::json;

    use super::*;

    #[test]
    fn uses_api_parameter_names() {
        assert_eq!(
            serde_json::to_value(AuthQuery { customer_key: "k-1" }).unwrap(),
            json!({ CUSTOMER_KEY_PARAM: "k-1" })
        );
        assert_eq!(
            serde_json::to_value(DomainsPageQuery { page: 4 }).unwrap(),
            json!({ PAGE_PARAM: 4 })
        );
        assert_eq!(
            serde_json::to_value(DomainNameFilter { name: "example.com" }).unwrap(),
            json!({ DOMAIN_NAME_FILTER_PARAM: "example.com" })
        );
    }
}
