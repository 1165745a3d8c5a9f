//! Enforcement API client
//!
//! Wraps [`HttpClient`] with customer-key authentication, JSON encoding and
//! translation of HTTP failures into [`EnforcementError`].

use std::collections::{BTreeMap, HashSet};

use enforcement_domain::constants::PAGE_PARAM;
use enforcement_domain::{ClientConfig, DomainCheck, EnforcementError, Event, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::query::{AuthQuery, DomainNameFilter, DomainsPageQuery};
use super::types::{DomainPage, DomainRef, EventBatchResponse};
use crate::errors::InfraError;
use crate::http::{redact_url, HttpClient};

/// Options for [`ApiClient::list_domains_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDomains {
    /// First page to fetch (1-based)
    pub page: u32,
    /// Follow `next` cursors until the last page
    pub get_all: bool,
}

impl Default for ListDomains {
    fn default() -> Self {
        Self { page: 1, get_all: false }
    }
}

impl ListDomains {
    pub fn all() -> Self {
        Self { page: 1, get_all: true }
    }

    pub fn page(page: u32) -> Self {
        Self { page, get_all: false }
    }
}

/// Client for the Enforcement API
///
/// Holds only immutable credentials and settings; every call is an
/// independent request/response cycle.
pub struct ApiClient {
    http_client: HttpClient,
    customer_key: String,
    api_version: String,
    base_url: Url,
    domain_check: DomainCheck,
}

impl ApiClient {
    /// Create a client for the given customer key and API version.
    ///
    /// # Errors
    /// Returns `EnforcementError::Config` if the key or version is blank or
    /// the HTTP client cannot be built.
    pub fn new(customer_key: impl Into<String>, api_version: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(customer_key).with_api_version(api_version))
    }

    /// Create a client from a loaded configuration.
    ///
    /// # Errors
    /// Returns `EnforcementError::Config` if the configuration is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.resolved_base_url()).map_err(InfraError::from)?;
        if base_url.cannot_be_a_base() {
            return Err(EnforcementError::Config(format!("base URL {base_url} cannot be a base")));
        }

        let mut builder = HttpClient::builder().timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            http_client: builder.build()?,
            customer_key: config.customer_key.clone(),
            api_version: config.api_version.clone(),
            base_url,
            domain_check: config.domain_check,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn domain_check(&self) -> DomainCheck {
        self.domain_check
    }

    /// Submit a single event.
    ///
    /// # Errors
    /// See [`ApiClient::add_events`].
    pub async fn add_event(&self, event: &Event) -> Result<Option<String>> {
        self.add_events(std::slice::from_ref(event)).await
    }

    /// Submit a batch of events with `POST /events`.
    ///
    /// Every event is converted before anything is sent, so one incomplete
    /// event fails the whole batch.
    ///
    /// # Returns
    /// The server-assigned batch identifier, if the response carries one.
    ///
    /// # Errors
    /// - `EmptyBatch` when `events` is empty
    /// - `IncompleteEvent` when any event lacks required properties
    /// - `ApiRequest` on transport failure, non-success status or an
    ///   unparseable response body
    #[instrument(skip(self, events), fields(count = events.len()))]
    pub async fn add_events(&self, events: &[Event]) -> Result<Option<String>> {
        if events.is_empty() {
            return Err(EnforcementError::EmptyBatch);
        }

        let batch = events
            .iter()
            .map(|event| event.to_wire_form_with(self.domain_check))
            .collect::<Result<Vec<_>>>()?;

        let response: Option<EventBatchResponse> = self.post("events", &batch).await?;
        let batch_id = response.and_then(|body| body.batch_id());

        info!(count = events.len(), batch_id = ?batch_id, "events submitted");
        Ok(batch_id)
    }

    /// List registered domains as a name → id mapping.
    ///
    /// # Errors
    /// See [`ApiClient::list_domains_with`].
    pub async fn list_domains(&self, page: u32, get_all: bool) -> Result<BTreeMap<String, u64>> {
        self.list_domains_with(ListDomains { page, get_all }).await
    }

    /// List registered domains starting at `options.page`.
    ///
    /// With `get_all`, `next` cursors are followed one page at a time until
    /// the last page. Entries from all pages are merged into one mapping.
    ///
    /// # Errors
    /// - `ApiRequest` on transport failure, non-success status or an
    ///   unparseable page
    /// - `Pagination` when a cursor has no page number or points at a page
    ///   that was already fetched
    #[instrument(skip(self))]
    pub async fn list_domains_with(&self, options: ListDomains) -> Result<BTreeMap<String, u64>> {
        let mut domains = BTreeMap::new();
        let mut visited = HashSet::new();
        let mut page = options.page;

        loop {
            if !visited.insert(page) {
                warn!(page, "pagination cursor revisits a fetched page");
                return Err(EnforcementError::Pagination {
                    page,
                    message: "next cursor points at a page that was already fetched".into(),
                });
            }

            let body: DomainPage = self.get("domains", &DomainsPageQuery { page }).await?;
            debug!(page, entries = body.data.len(), "fetched domains page");
            domains.extend(body.data.into_iter().map(|entry| (entry.name, entry.id)));

            if !options.get_all {
                break;
            }
            match body.meta.next_cursor() {
                Some(cursor) => page = self.page_from_cursor(cursor, page)?,
                None => break,
            }
        }

        info!(pages = visited.len(), domains = domains.len(), "domains listed");
        Ok(domains)
    }

    /// Delete a domain by identifier (purely numeric input) or by name.
    ///
    /// # Returns
    /// `true` when the domain was deleted, `false` when it does not exist.
    ///
    /// # Errors
    /// `ApiRequest` for blank input, transport failures and any status other
    /// than 204 or 404.
    #[instrument(skip(self))]
    pub async fn delete_domain(&self, domain: &str) -> Result<bool> {
        let request = match DomainRef::parse(domain) {
            DomainRef::Id(id) => self.request(Method::DELETE, &format!("domains/{id}")),
            DomainRef::Name("") => {
                return Err(EnforcementError::ApiRequest {
                    url: self.endpoint("domains"),
                    status: None,
                    message: "domain name or id must not be empty".into(),
                });
            }
            DomainRef::Name(name) => {
                self.request(Method::DELETE, "domains").query(&DomainNameFilter { name })
            }
        };

        let response = self.http_client.send(request).await?;
        match response.status() {
            StatusCode::NO_CONTENT => {
                info!("domain deleted");
                Ok(true)
            }
            StatusCode::NOT_FOUND => {
                info!("domain not found");
                Ok(false)
            }
            _ => Err(Self::status_error(response).await),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Authenticated request primitive shared by every endpoint.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.endpoint(path))
            .query(&AuthQuery { customer_key: &self.customer_key })
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    async fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, path).query(query);
        let response = self.http_client.send(request).await?;
        Self::read_json(response).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let request = self.request(Method::POST, path).body(body);
        let response = self.http_client.send(request).await?;
        Self::read_json(response).await
    }

    async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        let url = redact_url(response.url());

        // No body by RFC for these statuses
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| EnforcementError::ApiRequest {
                url,
                status: Some(status.as_u16()),
                message: "response has no content".into(),
            });
        }

        let bytes = response.bytes().await.map_err(InfraError::from)?;
        serde_json::from_slice(&bytes).map_err(|err| EnforcementError::ApiRequest {
            url,
            status: Some(status.as_u16()),
            message: format!("could not convert the response to JSON: {err}"),
        })
    }

    async fn status_error(response: Response) -> EnforcementError {
        let status = response.status();
        let url = redact_url(response.url());
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());

        warn!(%url, status = status.as_u16(), %message, "request rejected by server");
        EnforcementError::ApiRequest { url, status: Some(status.as_u16()), message }
    }

    /// Extract the page number from a `next` cursor URL.
    fn page_from_cursor(&self, cursor: &str, current: u32) -> Result<u32> {
        let pagination_error = |message: String| EnforcementError::Pagination { page: current, message };

        let next = self
            .base_url
            .join(cursor)
            .map_err(|err| pagination_error(format!("invalid next cursor: {err}")))?;

        next.query_pairs()
            .find(|(name, _)| name == PAGE_PARAM)
            .and_then(|(_, value)| value.parse::<u32>().ok())
            .ok_or_else(|| pagination_error("next cursor carries no page number".into()))
    }
}

/// Best-effort human-readable message from an error response body.
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            for key in ["message", "error", "description"] {
                if let Some(Value::String(text)) = fields.get(key) {
                    return Some(text.clone());
                }
            }
            Some(Value::Object(fields).to_string())
        }
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(body.to_string()),
    }
}
