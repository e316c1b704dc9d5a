//! Wire-level GraphQL request and response envelopes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::clients::graphql::GraphqlError;

/// The JSON body of a GraphQL request: `{"query": .., "variables": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest<V> {
    /// The GraphQL document.
    pub query: Cow<'static, str>,
    /// Values for the variables declared by `query`.
    pub variables: V,
}

impl<V> GraphqlRequest<V> {
    /// Creates a request for a fixed query document.
    #[must_use]
    pub const fn new(query: &'static str, variables: V) -> Self {
        Self {
            query: Cow::Borrowed(query),
            variables,
        }
    }
}

/// A single entry of the `errors` list of a GraphQL response.
///
/// Fields other than `message` (locations, path, extensions) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphqlErrorObject {
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
}

/// The JSON body of a GraphQL response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// The result of the operation, absent or `null` on failure.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Errors reported by the server, absent or `null` on success.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorObject>>,
}

impl GraphqlResponse {
    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decoding`] if the body is not a JSON object of
    /// the envelope shape.
    pub fn parse(body: &str) -> Result<Self, GraphqlError> {
        serde_json::from_str(body).map_err(GraphqlError::Decoding)
    }

    /// Unwraps the envelope into its `data` value.
    ///
    /// A non-empty `errors` list takes precedence over `data`: the first
    /// error's message becomes [`GraphqlError::Response`]. If that error has
    /// no message, or if neither list nor data are present, the result is
    /// [`GraphqlError::Unknown`].
    ///
    /// # Errors
    ///
    /// See above.
    pub fn into_data(self) -> Result<serde_json::Value, GraphqlError> {
        if let Some(first) = self.errors.and_then(|errors| errors.into_iter().next()) {
            return Err(first
                .message
                .map_or(GraphqlError::Unknown, |message| GraphqlError::Response {
                    message,
                }));
        }

        match self.data {
            Some(serde_json::Value::Null) | None => Err(GraphqlError::Unknown),
            Some(data) => Ok(data),
        }
    }
}
