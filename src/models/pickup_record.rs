//! # Pickup Records
//!
//! The record-store document a driver's pickup list is built from. Only the
//! fields the batching engine reads are typed; everything else rides along in
//! `extra` maps so a batched pickup still carries the whole original document.

use super::timestamp::TimestampValue;
use crate::error::{BatchingError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Read access to the fields the batching engine needs.
///
/// Implemented by [`PickupRecord`] and by [`BatchedPickup`](crate::batching::BatchedPickup),
/// so any record shape that can answer these questions can be batched and sorted.
pub trait PickupFields {
    fn pickup_id(&self) -> &str;

    /// `location.address`
    fn location_address(&self) -> Option<&str>;

    /// `client.address.formatted`
    fn client_address(&self) -> Option<&str>;

    /// `pickup.scheduledDate`
    fn scheduled_pickup_time(&self) -> Option<&TimestampValue>;

    /// Top-level `scheduledDate`
    fn scheduled_date(&self) -> Option<&TimestampValue>;

    /// `createdAt`
    fn created_at(&self) -> Option<&TimestampValue>;
}

/// A nested document that either has the expected shape or is kept verbatim.
///
/// Records written by older clients sometimes store a sub-document as a plain
/// string or some other shape. Those decode as `Unrecognized`, serialize back
/// unchanged, and read as if the sub-document were absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubDocument<T> {
    Typed(T),
    Unrecognized(Value),
}

impl<T> SubDocument<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            SubDocument::Typed(document) => Some(document),
            SubDocument::Unrecognized(_) => None,
        }
    }

    /// The typed document, or a default one in place of an unrecognized value.
    pub fn into_typed_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            SubDocument::Typed(document) => document,
            SubDocument::Unrecognized(_) => T::default(),
        }
    }
}

impl<T: Default> Default for SubDocument<T> {
    fn default() -> Self {
        SubDocument::Typed(T::default())
    }
}

impl<T> From<T> for SubDocument<T> {
    fn from(document: T) -> Self {
        SubDocument::Typed(document)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PickupLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<SubDocument<ClientAddress>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `pickup` sub-document: driver assignment and completion details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<TimestampValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SubDocument<PickupLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<SubDocument<ClientInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<SubDocument<PickupDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<TimestampValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestampValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PickupRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_location_address(mut self, address: impl Into<String>) -> Self {
        let mut location = typed_or_default(self.location.take());
        location.address = Some(address.into());
        self.location = Some(location.into());
        self
    }

    pub fn with_client_address(mut self, formatted: impl Into<String>) -> Self {
        let mut client = typed_or_default(self.client.take());
        let mut address = typed_or_default(client.address.take());
        address.formatted = Some(formatted.into());
        client.address = Some(address.into());
        self.client = Some(client.into());
        self
    }

    pub fn with_scheduled_pickup_time(mut self, value: impl Into<TimestampValue>) -> Self {
        let mut pickup = typed_or_default(self.pickup.take());
        pickup.scheduled_date = Some(value.into());
        self.pickup = Some(pickup.into());
        self
    }

    pub fn with_scheduled_date(mut self, value: impl Into<TimestampValue>) -> Self {
        self.scheduled_date = Some(value.into());
        self
    }

    pub fn with_created_at(mut self, value: impl Into<TimestampValue>) -> Self {
        self.created_at = Some(value.into());
        self
    }
}

fn typed_or_default<T: Default>(slot: Option<SubDocument<T>>) -> T {
    slot.map(SubDocument::into_typed_or_default)
        .unwrap_or_default()
}

impl PickupFields for PickupRecord {
    fn pickup_id(&self) -> &str {
        &self.id
    }

    fn location_address(&self) -> Option<&str> {
        self.location.as_ref()?.typed()?.address.as_deref()
    }

    fn client_address(&self) -> Option<&str> {
        self.client
            .as_ref()?
            .typed()?
            .address
            .as_ref()?
            .typed()?
            .formatted
            .as_deref()
    }

    fn scheduled_pickup_time(&self) -> Option<&TimestampValue> {
        self.pickup.as_ref()?.typed()?.scheduled_date.as_ref()
    }

    fn scheduled_date(&self) -> Option<&TimestampValue> {
        self.scheduled_date.as_ref()
    }

    fn created_at(&self) -> Option<&TimestampValue> {
        self.created_at.as_ref()
    }
}

/// Decode a JSON array of record-store documents.
pub fn decode_pickups(json: &str) -> Result<Vec<PickupRecord>> {
    let value: Value = serde_json::from_str(json)?;
    decode_pickups_value(value)
}

/// Decode an already-parsed JSON array of record-store documents.
///
/// Each element must be an object with a string `id`. Any other field may be
/// missing or oddly shaped; such records decode and later batch as `unknown`.
pub fn decode_pickups_value(value: Value) -> Result<Vec<PickupRecord>> {
    let Value::Array(items) = value else {
        return Err(BatchingError::InvalidRecord {
            index: 0,
            message: "expected a JSON array of pickups".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.get("id").is_some_and(Value::is_string) {
                return Err(BatchingError::InvalidRecord {
                    index,
                    message: "missing string `id`".to_string(),
                });
            }
            serde_json::from_value(item).map_err(|e| BatchingError::InvalidRecord {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_document() {
        let doc = json!([{
            "id": "p-1",
            "location": {"address": "1 Main St, San Jose, CA 95113", "accessNotes": "gate 4"},
            "client": {"address": {"formatted": "ignored 94103", "city": "SF"}},
            "pickup": {"scheduledDate": {"seconds": 1_700_000_000, "nanoseconds": 0}, "driver": "d-9"},
            "createdAt": "2025-01-01T08:00:00Z",
            "org": {"name": "Corner Market"}
        }]);

        let records = decode_pickups_value(doc).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.pickup_id(), "p-1");
        assert_eq!(
            record.location_address(),
            Some("1 Main St, San Jose, CA 95113")
        );
        assert_eq!(record.client_address(), Some("ignored 94103"));
        assert!(record.scheduled_pickup_time().is_some());
        assert!(record.scheduled_date().is_none());
        assert!(record.created_at().is_some());
        assert_eq!(record.extra.get("org"), Some(&json!({"name": "Corner Market"})));
        assert_eq!(
            record.pickup.as_ref().unwrap().typed().unwrap().extra.get("driver"),
            Some(&json!("d-9"))
        );
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let doc = json!({
            "id": "p-2",
            "location": {"address": "No Street Name", "lat": 37.3},
            "status": "accepted"
        });
        let record: PickupRecord = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), doc);
    }

    #[test]
    fn test_oddly_shaped_sub_documents_still_decode() {
        let records = decode_pickups(
            r#"[
                {"id": "ok", "location": {"address": "CA 95113"}},
                {"id": "flat-client", "client": {"address": "1 Main St, CA 95113"}},
                {"id": "flat-location", "location": "CA 95113"},
                {"id": "flat-pickup", "pickup": "tomorrow", "createdAt": "2025-06-02T09:00:00Z"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].location_address(), Some("CA 95113"));
        assert_eq!(records[1].client_address(), None);
        assert_eq!(records[2].location_address(), None);
        assert!(matches!(
            records[2].location,
            Some(SubDocument::Unrecognized(_))
        ));
        assert!(records[3].scheduled_pickup_time().is_none());
        assert!(records[3].created_at().is_some());
    }

    #[test]
    fn test_unrecognized_sub_document_round_trips() {
        let doc = json!({
            "id": "p-4",
            "client": {"address": "1 Main St, CA 95113", "name": "Corner Market"}
        });
        let record: PickupRecord = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), doc);
    }

    #[test]
    fn test_builder_replaces_unrecognized_sub_document() {
        let mut record = PickupRecord::new("p-5");
        record.location = Some(SubDocument::Unrecognized(json!("somewhere")));
        let record = record.with_location_address("CA 94103");
        assert_eq!(record.location_address(), Some("CA 94103"));
    }

    #[test]
    fn test_missing_id_names_index() {
        let err = decode_pickups(r#"[{"id": "ok"}, {"location": {}}]"#).unwrap_err();
        assert!(matches!(err, BatchingError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_non_array_rejected() {
        let err = decode_pickups(r#"{"id": "solo"}"#).unwrap_err();
        assert!(matches!(err, BatchingError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        assert!(matches!(
            decode_pickups("[{"),
            Err(BatchingError::Decode(_))
        ));
    }

    #[test]
    fn test_builder_sets_nested_fields() {
        let record = PickupRecord::new("p-3")
            .with_client_address("9 Elm St, Oakland, CA 94607")
            .with_scheduled_date(TimestampValue::from_text("2025-02-01T10:00:00Z"));
        assert_eq!(record.location_address(), None);
        assert_eq!(record.client_address(), Some("9 Elm St, Oakland, CA 94607"));
        assert!(record.scheduled_pickup_time().is_none());
        assert!(record.scheduled_date().is_some());
    }
}
