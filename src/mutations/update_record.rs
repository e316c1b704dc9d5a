//! The `updateRecord` mutation.

use serde::{Deserialize, Serialize};

use super::Mutation;

/// Touches an existing record, extending the visit's duration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    record_id: String,
}

impl UpdateRecord {
    /// Creates the mutation for the record with the given id.
    #[must_use]
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
        }
    }

    /// Returns the id of the record being updated.
    #[must_use]
    pub fn record_id(&self) -> &str {
        &self.record_id
    }
}

#[derive(Debug, Deserialize)]
struct SuccessPayload {
    success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRecordData {
    update_record: SuccessPayload,
}

impl Mutation for UpdateRecord {
    const NAME: &'static str = "updateRecord";

    const QUERY: &'static str =
        "mutation updateRecord($recordId:ID!){updateRecord(id:$recordId){success}}";

    /// Whether the server accepted the update.
    type Output = bool;

    fn decode(data: serde_json::Value) -> Result<bool, serde_json::Error> {
        serde_json::from_value::<UpdateRecordData>(data).map(|d| d.update_record.success)
    }
}
