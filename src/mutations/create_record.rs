//! The `createRecord` mutation.

use serde::{Deserialize, Serialize};

use super::{Mutation, PayloadEnvelope};
use crate::attributes::Attributes;
use crate::config::DomainId;

/// Starts a new visit record on a domain.
///
/// # Example
///
/// ```rust
/// use ackee::{Attributes, DomainId};
/// use ackee::mutations::{CreateRecord, Mutation};
///
/// let input = Attributes::default().with_site_location("/settings");
/// let request = CreateRecord::new(DomainId::new("domain_id").unwrap(), input).into_request();
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["variables"]["domainId"], "domain_id");
/// assert_eq!(body["variables"]["input"]["siteLocation"], "/settings");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    domain_id: DomainId,
    input: Attributes,
}

impl CreateRecord {
    /// Creates the mutation for `domain_id` with the given attributes.
    #[must_use]
    pub const fn new(domain_id: DomainId, input: Attributes) -> Self {
        Self { domain_id, input }
    }

    /// Returns the domain the record is created on.
    #[must_use]
    pub const fn domain_id(&self) -> &DomainId {
        &self.domain_id
    }

    /// Returns the attributes sent with the record.
    #[must_use]
    pub const fn input(&self) -> &Attributes {
        &self.input
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRecordData {
    create_record: PayloadEnvelope,
}

impl Mutation for CreateRecord {
    const NAME: &'static str = "createRecord";

    const QUERY: &'static str = "mutation createRecord($domainId:ID!,$input:CreateRecordInput!){createRecord(domainId:$domainId,input:$input){payload{id}}}";

    /// Id of the created record.
    type Output = String;

    fn decode(data: serde_json::Value) -> Result<String, serde_json::Error> {
        serde_json::from_value::<CreateRecordData>(data).map(|d| d.create_record.into_id())
    }
}
