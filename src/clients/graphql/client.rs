//! GraphQL client implementation for the Ackee API.
//!
//! This module provides the [`GraphqlClient`] type, which runs a
//! [`Mutation`] through the full encode → POST → unwrap → decode pipeline.

use crate::clients::graphql::{GraphqlError, GraphqlResponse};
use crate::clients::HttpClient;
use crate::config::{EndpointUrl, TrackerConfig};
use crate::mutations::Mutation;

/// GraphQL client for an Ackee server.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ackee::EndpointUrl;
/// use ackee::clients::GraphqlClient;
/// use ackee::mutations::UpdateRecord;
///
/// let client = GraphqlClient::new(EndpointUrl::new("https://stats.example.com/api")?, None);
/// let success = client.send(UpdateRecord::new("rec-1")).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `url` - The GraphQL endpoint of the Ackee server
    /// * `config` - Optional configuration for the user agent prefix
    #[must_use]
    pub fn new(url: EndpointUrl, config: Option<&TrackerConfig>) -> Self {
        Self {
            http_client: HttpClient::new(url, config),
        }
    }

    /// Returns the endpoint URL of this client.
    #[must_use]
    pub const fn url(&self) -> &EndpointUrl {
        self.http_client.url()
    }

    /// Sends a mutation and decodes its result.
    ///
    /// The HTTP status code is only logged. GraphQL servers report failures
    /// in the body, which is interpreted the same way for every status.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Encoding`] if the variables cannot be serialized (nothing is sent)
    /// - [`GraphqlError::Network`] if no response is received
    /// - [`GraphqlError::Response`] if the server reports an error
    /// - [`GraphqlError::Decoding`] if the body or `data` has an unexpected shape
    /// - [`GraphqlError::Unknown`] if the body has neither data nor errors
    pub async fn send<M: Mutation>(&self, mutation: M) -> Result<M::Output, GraphqlError> {
        let body = serde_json::to_vec(&mutation.into_request()).map_err(GraphqlError::Encoding)?;

        tracing::debug!(mutation = M::NAME, "Sending Ackee mutation");

        let response = self.http_client.post_json(body).await?;

        if !response.is_ok() {
            tracing::debug!(
                mutation = M::NAME,
                status = response.code,
                request_id = response.request_id(),
                "Ackee responded with a non-success status"
            );
        }

        let data = GraphqlResponse::parse(&response.body)?.into_data()?;
        M::decode(data).map_err(GraphqlError::Decoding)
    }
}
