//! Error taxonomy of the GraphQL request pipeline.
//!
//! Every mutation sent through [`GraphqlClient`](super::GraphqlClient) ends
//! in exactly one of these errors or in a decoded value. The variants map to
//! the stage of the pipeline that failed:
//!
//! - [`GraphqlError::Encoding`]: the request could not be serialized; nothing was sent
//! - [`GraphqlError::Network`]: no response was received
//! - [`GraphqlError::Response`]: the server answered with a GraphQL error
//! - [`GraphqlError::Decoding`]: the body or its `data` did not have the expected shape
//! - [`GraphqlError::Unknown`]: the body had neither usable `data` nor `errors`
//!
//! None of them is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use ackee::GraphqlError;
//!
//! match client.send(mutation).await {
//!     Ok(id) => println!("Created {id}"),
//!     Err(GraphqlError::Response { message }) => println!("Rejected: {message}"),
//!     Err(e) => println!("Tracking failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations against an Ackee server.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request body could not be serialized.
    #[error("Failed to encode GraphQL request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request could not be delivered or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server reported an error in the `errors` list of the response.
    #[error("GraphQL error: {message}")]
    Response {
        /// Message of the first reported error.
        message: String,
    },

    /// The response did not have the expected structure.
    #[error("Failed to decode GraphQL response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The response carried neither data nor an interpretable error.
    #[error("Unknown GraphQL error: the response contained neither data nor errors")]
    Unknown,
}

impl From<HttpError> for GraphqlError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Network(e) => Self::Network(e),
        }
    }
}

impl GraphqlError {
    /// Returns `true` if the server itself rejected the operation.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(self, Self::Response { .. })
    }

    /// Returns `true` if the response did not have the expected shape.
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }
}
