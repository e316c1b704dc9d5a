//! The GraphQL mutations understood by an Ackee server.
//!
//! Each mutation type is both the builder of its request and the decoder of
//! its response:
//!
//! - [`CreateRecord`]: starts a visit, yields the new record id
//! - [`UpdateRecord`]: touches a visit so the server can compute its duration
//! - [`CreateAction`]: records an event value, yields the new action id
//!
//! The query documents are fixed literals. Caller-provided values only
//! travel in the `variables` object, never interpolated into the query.
//!
//! # Example
//!
//! ```rust
//! use ackee::mutations::{Mutation, UpdateRecord};
//! use serde_json::json;
//!
//! let request = UpdateRecord::new("rec-1").into_request();
//! assert_eq!(
//!     serde_json::to_value(&request.variables).unwrap(),
//!     json!({ "recordId": "rec-1" })
//! );
//!
//! let success = UpdateRecord::decode(json!({ "updateRecord": { "success": true } })).unwrap();
//! assert!(success);
//! ```

mod create_action;
mod create_record;
pub(crate) mod finite;
mod update_record;

pub use create_action::{ActionInput, CreateAction};
pub use create_record::CreateRecord;
pub use update_record::UpdateRecord;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::clients::graphql::GraphqlRequest;

/// A GraphQL mutation with a fixed query document and a typed result.
///
/// The implementing type is the mutation's `variables` object.
pub trait Mutation: Serialize + Sized {
    /// Operation name, used for logging.
    const NAME: &'static str;

    /// The full query document sent to the server.
    const QUERY: &'static str;

    /// The value extracted from a successful response.
    type Output;

    /// Extracts the result from the `data` object of a response.
    ///
    /// # Errors
    ///
    /// Returns an error if the expected nested keys are missing or have the
    /// wrong type.
    fn decode(data: serde_json::Value) -> Result<Self::Output, serde_json::Error>;

    /// Wraps these variables into a request envelope.
    #[must_use]
    fn into_request(self) -> GraphqlRequest<Self> {
        GraphqlRequest::new(Self::QUERY, self)
    }
}

/// The `{ "payload": { "id": .. } }` shape shared by create mutations.
#[derive(Debug, Deserialize)]
struct PayloadEnvelope {
    payload: IdPayload,
}

#[derive(Debug, Deserialize)]
struct IdPayload {
    #[serde(deserialize_with = "non_empty_id")]
    id: String,
}

impl PayloadEnvelope {
    fn into_id(self) -> String {
        self.payload.id
    }
}

/// Server-assigned ids are never empty; an empty one is a malformed response.
fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let id = String::deserialize(deserializer)?;
    if id.is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(&id),
            &"a non-empty id",
        ));
    }
    Ok(id)
}
