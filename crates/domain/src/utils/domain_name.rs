//! Destination domain syntax check
//!
//! Hostnames follow RFC 1035 label rules, relaxed to allow underscores
//! (seen in the wild on service records) and any depth of subdomains.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of a hostname, excluding a trailing root dot
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// How destination domains are checked before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCheck {
    /// Drop domains that are not syntactically valid hostnames
    #[default]
    Strict,
    /// Forward whatever was assigned, unchecked
    PassThrough,
}

impl DomainCheck {
    /// Apply the check, returning the trimmed domain when it is accepted.
    pub fn apply(self, candidate: &str) -> Option<String> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return None;
        }

        match self {
            Self::PassThrough => Some(candidate.to_string()),
            Self::Strict => is_valid_domain(candidate).then(|| candidate.to_string()),
        }
    }
}

impl std::str::FromStr for DomainCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "pass_through" | "passthrough" | "off" => Ok(Self::PassThrough),
            other => Err(format!("Invalid DomainCheck: {other}")),
        }
    }
}

fn hostname_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?\.)+[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?\.?$",
        )
        .expect("hostname pattern compiles")
    })
}

/// Check whether `candidate` is a syntactically valid hostname with at least
/// two labels.
pub fn is_valid_domain(candidate: &str) -> bool {
    let without_root = candidate.strip_suffix('.').unwrap_or(candidate);
    if without_root.is_empty() || without_root.len() > MAX_DOMAIN_LENGTH {
        return false;
    }
    hostname_regex().is_match(candidate)
}
