//! Keep credentials out of logs and error messages

use enforcement_domain::constants::CUSTOMER_KEY_PARAM;
use url::Url;

const REDACTED: &str = "***";

/// Render `url` with the customer key query value masked.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == CUSTOMER_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == CUSTOMER_KEY_PARAM { REDACTED.into() } else { value.into_owned() };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
