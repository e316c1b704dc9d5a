//! HTTP client for the analytics endpoint.
//!
//! This module provides the [`HttpClient`] type, which POSTs JSON bodies to
//! a single configured endpoint.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::{EndpointUrl, TrackerConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client for posting requests to an Ackee server.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - The `Content-Type` header of JSON bodies
/// - Response header collection
///
/// Requests use the platform default timeout and are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Endpoint every request is posted to.
    url: EndpointUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `url` - The GraphQL endpoint of the Ackee server
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ackee::EndpointUrl;
    /// use ackee::clients::HttpClient;
    ///
    /// let url = EndpointUrl::new("https://stats.example.com/api").unwrap();
    /// let client = HttpClient::new(url, None);
    /// assert_eq!(client.url().as_ref(), "https://stats.example.com/api");
    /// ```
    #[must_use]
    pub fn new(url: EndpointUrl, config: Option<&TrackerConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(TrackerConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Ackee Rust Tracker v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url,
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub const fn url(&self) -> &EndpointUrl {
        &self.url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a serialized JSON body to the endpoint.
    ///
    /// Any response that arrives is returned, including non-2xx statuses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or the
    /// response body could not be read.
    pub async fn post_json(&self, body: Vec<u8>) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self
            .client
            .post(self.url.as_url().clone())
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, bytes = body.len(), "Ackee response received");

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DomainId;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(url: &str) -> EndpointUrl {
        EndpointUrl::new(url).unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(endpoint("https://stats.example.com/api"), None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Ackee Rust Tracker v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = TrackerConfig::builder()
            .url(endpoint("https://stats.example.com/api"))
            .domain(DomainId::new("domain").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(config.url().clone(), Some(&config));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Ackee Rust Tracker"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(endpoint("https://stats.example.com/api"), None);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_post_json_sends_body_with_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .and(header("content-type", JSON_CONTENT_TYPE))
            .and(body_string(r#"{"query":"q"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(endpoint(&format!("{}/api", server.uri())), None);
        let response = client
            .post_json(br#"{"query":"q"}"#.to_vec())
            .await
            .unwrap();

        assert!(response.is_ok());
        assert_eq!(response.body, r#"{"data":{}}"#);
    }

    #[tokio::test]
    async fn test_post_json_returns_non_2xx_responses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(502)
                    .insert_header("X-Request-Id", "req-1")
                    .set_body_string("Bad Gateway"),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(endpoint(&server.uri()), None);
        let response = client.post_json(b"{}".to_vec()).await.unwrap();

        assert_eq!(response.code, 502);
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.body, "Bad Gateway");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
