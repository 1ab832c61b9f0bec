//! Custom object record models.
//!
//! Custom objects are user-defined schemas in Freshservice. Each record of a
//! custom object holds caller-defined fields, so the models here are generic
//! over the payload type `T`.
//!
//! Request and response envelopes differ: requests wrap the payload under
//! `data`, single-record responses wrap the record under `custom_object`, and
//! listings wrap records under `records`. Each operation has its own envelope
//! type so the wire shape is explicit at every call site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single custom object record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomObjectRecord<T> {
    /// The caller-defined record payload.
    pub data: T,

    /// Link to the next page of a paginated listing.
    #[serde(
        rename = "next_page_link",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page: Option<Url>,
}

impl<T> CustomObjectRecord<T> {
    /// Wrap a payload with no pagination link.
    pub fn new(data: T) -> Self {
        Self {
            data,
            next_page: None,
        }
    }
}

/// Fields Freshservice adds to every record.
///
/// Embed in a payload type with `#[serde(flatten)]`:
///
/// ```
/// use freshservice::CustomObjectRecordMetadata;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Asset {
///     name: String,
///     #[serde(flatten)]
///     meta: CustomObjectRecordMetadata,
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomObjectRecordMetadata {
    /// When the record was created.
    #[serde(
        rename = "bo_created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Display identifier, unique within the custom object.
    #[serde(
        rename = "bo_display_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_id: Option<u64>,

    /// When the record was last updated.
    #[serde(
        rename = "bo_updated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CustomObjectRecordMetadata {
    /// Returns true if no metadata field is set.
    pub fn is_empty(&self) -> bool {
        self.created_at.is_none() && self.display_id.is_none() && self.updated_at.is_none()
    }
}

/// Request body for creating a record: `{"data": T}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomObjectRecordRequest<T> {
    pub data: T,
}

impl<T> CreateCustomObjectRecordRequest<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response body for creating a record: `{"custom_object": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomObjectRecordResponse<T> {
    pub custom_object: CustomObjectRecord<T>,
}

/// Request body for updating a record: `{"data": T}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomObjectRecordRequest<T> {
    pub data: T,
}

impl<T> UpdateCustomObjectRecordRequest<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response body for updating a record: `{"custom_object": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomObjectRecordResponse<T> {
    pub custom_object: CustomObjectRecord<T>,
}

/// Response body for listing records: `{"records": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCustomObjectRecordsResponse<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<CustomObjectRecord<T>>,
}

impl<T> ListCustomObjectRecordsResponse<T> {
    /// Link to the next page, if the server returned one.
    ///
    /// The link rides on the records themselves; the first one found wins.
    pub fn next_page(&self) -> Option<&Url> {
        self.records.iter().find_map(|r| r.next_page.as_ref())
    }

    /// Returns true if the listing has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in the listing.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over the record payloads.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter().map(|r| &r.data)
    }
}

impl<T> IntoIterator for ListCustomObjectRecordsResponse<T> {
    type Item = CustomObjectRecord<T>;
    type IntoIter = std::vec::IntoIter<CustomObjectRecord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        name: String,
        #[serde(flatten)]
        meta: CustomObjectRecordMetadata,
    }

    #[test]
    fn test_create_request_envelope() {
        let request = CreateCustomObjectRecordRequest::new(json!({"name": "Widget"}));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"data": {"name": "Widget"}}));
    }

    #[test]
    fn test_create_and_update_requests_serialize_identically() {
        let payload = json!({"name": "Widget", "count": 3});
        let create = serde_json::to_string(&CreateCustomObjectRecordRequest::new(&payload)).unwrap();
        let update = serde_json::to_string(&UpdateCustomObjectRecordRequest::new(&payload)).unwrap();
        assert_eq!(create, update);
    }

    #[test]
    fn test_response_envelope_uses_custom_object_key() {
        let json = r#"{"custom_object": {"data": {"name": "Widget"}}}"#;
        let response: CreateCustomObjectRecordResponse<serde_json::Value> =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.custom_object.data["name"], "Widget");
        assert!(response.custom_object.next_page.is_none());

        // The request key is not accepted in place of the response key.
        let wrong = r#"{"data": {"name": "Widget"}}"#;
        assert!(serde_json::from_str::<UpdateCustomObjectRecordResponse<serde_json::Value>>(wrong)
            .is_err());
    }

    #[test]
    fn test_record_deserializes_metadata_and_next_page() {
        let json = r#"{
            "records": [
                {
                    "data": {
                        "name": "Laptop",
                        "bo_display_id": 12,
                        "bo_created_at": "2024-03-01T10:00:00Z",
                        "bo_updated_at": "2024-03-02T11:30:00Z"
                    },
                    "next_page_link": "https://acme.freshservice.com/api/v2/objects/42/records?page_size=1&next_page_token=abc"
                }
            ]
        }"#;
        let response: ListCustomObjectRecordsResponse<Widget> = serde_json::from_str(json).unwrap();

        assert_eq!(response.len(), 1);
        let widget = &response.records[0].data;
        assert_eq!(widget.name, "Laptop");
        assert_eq!(widget.meta.display_id, Some(12));
        assert_eq!(
            widget.meta.created_at.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
        assert!(widget.meta.updated_at.is_some());

        let next = response.next_page().unwrap();
        assert_eq!(next.path(), "/api/v2/objects/42/records");
        assert!(next.query().unwrap().contains("next_page_token=abc"));
    }

    #[test]
    fn test_empty_metadata_is_omitted() {
        let widget = Widget {
            name: "Widget".to_string(),
            meta: CustomObjectRecordMetadata::default(),
        };
        assert!(widget.meta.is_empty());
        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(value, json!({"name": "Widget"}));
    }

    #[test]
    fn test_list_without_next_page() {
        let response: ListCustomObjectRecordsResponse<serde_json::Value> =
            serde_json::from_str(r#"{"records": [{"data": {"a": 1}}, {"data": {"a": 2}}]}"#)
                .unwrap();
        assert!(response.next_page().is_none());
        let values: Vec<i64> = response.iter().map(|v| v["a"].as_i64().unwrap()).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_list_missing_records_key_is_empty() {
        let response: ListCustomObjectRecordsResponse<serde_json::Value> =
            serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }
}
