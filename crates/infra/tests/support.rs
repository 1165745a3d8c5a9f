#![allow(dead_code)]

use enforcement_infra::domain::{ClientConfig, DomainCheck, Event};
use enforcement_infra::ApiClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_CUSTOMER_KEY: &str = "1111-2222-3333-4444";
pub const API_PREFIX: &str = "/1.0";

/// Build a client that talks to the mock server under `/1.0`.
pub fn client_for(server: &MockServer) -> ApiClient {
    client_with_check(server, DomainCheck::Strict)
}

/// Build a client with an explicit destination-domain check.
pub fn client_with_check(server: &MockServer, domain_check: DomainCheck) -> ApiClient {
    let config = ClientConfig::new(TEST_CUSTOMER_KEY)
        .with_base_url(format!("{}{}", server.uri(), API_PREFIX))
        .with_domain_check(domain_check);
    ApiClient::from_config(&config).expect("api client should be created")
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}/{path}")
}

/// A fully populated event.
pub fn sample_event() -> Event {
    Event::new()
        .with_device_id("ba6a59f4-e692-4724-ba36-c28132c761de")
        .with_device_version("13.7a")
        .with_event_time("2013-02-08T09:30:26Z")
        .with_alert_time("2013-02-08T09:31:00Z")
        .with_dst_domain("internetbadguys.com")
        .with_dst_url("http://internetbadguys.com/a-bad-url")
        .with_event_type("malware")
}

/// Body of one `GET /domains` page.
pub fn domains_page(entries: &[(u64, &str)], next: Option<String>) -> Value {
    let data: Vec<Value> =
        entries.iter().map(|(id, name)| json!({ "id": id, "name": name })).collect();
    json!({
        "data": data,
        "meta": {
            "page": 1,
            "limit": 200,
            "prev": false,
            "next": next.map_or(Value::Bool(false), Value::String),
        }
    })
}

/// Absolute `next` cursor pointing at `page` on the mock server.
pub fn next_page(server: &MockServer, page: u32) -> Option<String> {
    Some(format!("{}{}/domains?customerKey={}&page={}", server.uri(), API_PREFIX, TEST_CUSTOMER_KEY, page))
}
