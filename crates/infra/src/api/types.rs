//! Request and response shapes for the Enforcement API

use serde::Deserialize;
use serde_json::Value;

/// One registered domain, as returned by `GET /domains`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainEntry {
    pub id: u64,
    pub name: String,
}

/// Pagination metadata of a domains page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    /// Full URL of the next page. The API sends `false` or omits the field
    /// on the last page.
    #[serde(default)]
    pub next: Option<Value>,
}

impl PageMeta {
    /// Cursor of the next page, if there is one
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_ref().and_then(Value::as_str).map(str::trim).filter(|next| !next.is_empty())
    }
}

/// A single page of `GET /domains`
#[derive(Debug, Clone, Deserialize)]
pub struct DomainPage {
    #[serde(default)]
    pub data: Vec<DomainEntry>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Body returned by `POST /events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventBatchResponse {
    #[serde(default)]
    pub id: Option<Value>,
}

impl EventBatchResponse {
    /// Server-assigned batch identifier; numeric ids are rendered as text.
    pub fn batch_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Target of a domain deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRef<'a> {
    /// Purely numeric input, taken as the domain's identifier
    Id(&'a str),
    Name(&'a str),
}

impl<'a> DomainRef<'a> {
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            Self::Id(input)
        } else {
            Self::Name(input)
        }
    }
}
