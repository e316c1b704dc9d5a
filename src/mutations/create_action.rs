//! The `createAction` mutation.

use serde::{Deserialize, Serialize};

use super::{Mutation, PayloadEnvelope};

/// The `input` variable of [`CreateAction`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionInput {
    /// Attribute label of the event (e.g. "Price").
    pub key: String,
    /// Numeric value recorded for the event. Must be finite to be sent.
    #[serde(serialize_with = "super::finite::serialize")]
    pub value: f64,
}

/// Records one occurrence of an event with a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAction {
    event_id: String,
    input: ActionInput,
}

impl CreateAction {
    /// Creates the mutation for the event with the given id.
    #[must_use]
    pub fn new(event_id: impl Into<String>, key: impl Into<String>, value: f64) -> Self {
        Self {
            event_id: event_id.into(),
            input: ActionInput {
                key: key.into(),
                value,
            },
        }
    }

    /// Returns the id of the event.
    #[must_use]
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Returns the key/value input.
    #[must_use]
    pub const fn input(&self) -> &ActionInput {
        &self.input
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateActionData {
    create_action: PayloadEnvelope,
}

impl Mutation for CreateAction {
    const NAME: &'static str = "createAction";

    const QUERY: &'static str = "mutation createAction($eventId:ID!,$input:CreateActionInput!){createAction(eventId:$eventId,input:$input){payload{id}}}";

    /// Id of the created action.
    type Output = String;

    fn decode(data: serde_json::Value) -> Result<String, serde_json::Error> {
        serde_json::from_value::<CreateActionData>(data).map(|d| d.create_action.into_id())
    }
}
