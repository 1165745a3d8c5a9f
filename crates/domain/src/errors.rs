//! Error types used throughout the client

use std::fmt;

use thiserror::Error;

use crate::types::EventProperty;

/// Main error type for the Enforcement client
#[derive(Error, Debug)]
pub enum EnforcementError {
    #[error("Incomplete event: missing required properties [{}]", join_properties(.missing))]
    IncompleteEvent { missing: Vec<EventProperty> },

    #[error("Unsuccessful request to URL [{url}]{}: {message}", format_status(.status))]
    ApiRequest { url: String, status: Option<u16>, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Pagination error at page {page}: {message}")]
    Pagination { page: u32, message: String },

    #[error("Cannot submit an empty batch of events")]
    EmptyBatch,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Stable error labels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied an event or batch that cannot be submitted
    Input,
    /// Transport failure or non-success HTTP status
    Request,
    /// Encoding failure
    Serialization,
    /// Server returned an inconsistent page cursor
    Pagination,
    /// Invalid client configuration
    Config,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Request => "request",
            Self::Serialization => "serialization",
            Self::Pagination => "pagination",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnforcementError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompleteEvent { .. } | Self::EmptyBatch => ErrorCategory::Input,
            Self::ApiRequest { .. } => ErrorCategory::Request,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Pagination { .. } => ErrorCategory::Pagination,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// HTTP status attached to a request error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequest { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EnforcementError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

fn join_properties(properties: &[EventProperty]) -> String {
    properties.iter().map(|p| p.field_name()).collect::<Vec<_>>().join(", ")
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP status {code})")).unwrap_or_default()
}

/// Result type alias for Enforcement operations
pub type Result<T> = std::result::Result<T, EnforcementError>;
