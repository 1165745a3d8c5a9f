//! Conversions from external infrastructure errors into domain errors.

use enforcement_domain::EnforcementError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

use crate::http::redact_url;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub EnforcementError);

impl From<InfraError> for EnforcementError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EnforcementError> for InfraError {
    fn from(value: EnforcementError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoEnforcementError {
    fn into_enforcement(self) -> EnforcementError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → EnforcementError */
/* -------------------------------------------------------------------------- */

impl IntoEnforcementError for HttpError {
    fn into_enforcement(self) -> EnforcementError {
        let url = self.url().map_or_else(|| "<unknown>".to_string(), redact_url);
        let status = self.status().map(|status| status.as_u16());

        let message = if self.is_timeout() {
            "HTTP request timed out".to_string()
        } else if self.is_connect() {
            format!("HTTP connection failure: {}", self.without_url())
        } else if self.is_builder() {
            format!("invalid HTTP request: {}", self.without_url())
        } else if self.is_decode() {
            format!("could not decode response body: {}", self.without_url())
        } else {
            self.without_url().to_string()
        };

        EnforcementError::ApiRequest { url, status, message }
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_enforcement())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → EnforcementError */
/* -------------------------------------------------------------------------- */

impl IntoEnforcementError for UrlError {
    fn into_enforcement(self) -> EnforcementError {
        EnforcementError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_enforcement())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn http_status_error_keeps_status_and_redacts_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(format!("{}/domains?customerKey=secret-key", server.uri()))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap_err();

        let mapped: EnforcementError = InfraError::from(error).into();
        match mapped {
            EnforcementError::ApiRequest { url, status, .. } => {
                assert_eq!(status, Some(401));
                assert!(url.contains("/domains"));
                assert!(!url.contains("secret-key"));
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_failure_has_no_status() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}/events")).send().await.unwrap_err();

        let mapped: EnforcementError = InfraError::from(error).into();
        match mapped {
            EnforcementError::ApiRequest { url, status, message } => {
                assert_eq!(status, None);
                assert!(url.ends_with("/events"));
                assert!(message.contains("connection"));
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[test]
    fn url_parse_error_maps_to_config() {
        let error = url::Url::parse("not a url").unwrap_err();
        let mapped: EnforcementError = InfraError::from(error).into();
        assert!(matches!(mapped, EnforcementError::Config(msg) if msg.contains("invalid URL")));
    }
}
