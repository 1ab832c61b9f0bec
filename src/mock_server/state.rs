//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Freshservice API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// A custom object and its records.
///
/// Records are JSON objects keyed by their display id, which doubles as the
/// record id in URLs.
#[derive(Debug, Clone)]
pub struct MockCustomObject {
    /// Human-readable name of the custom object.
    pub name: String,
    /// Records indexed by display id, in creation order.
    pub records: BTreeMap<u64, Value>,
    /// The display id the next created record receives.
    next_display_id: u64,
}

impl MockCustomObject {
    /// Create an empty custom object.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: BTreeMap::new(),
            next_display_id: 1,
        }
    }

    /// Add a record, stamping `bo_display_id` and timestamps.
    pub fn insert(&mut self, mut fields: Map<String, Value>) -> Value {
        let display_id = self.next_display_id;
        self.next_display_id += 1;

        let now = now();
        fields.insert("bo_display_id".to_string(), Value::from(display_id));
        fields.insert("bo_created_at".to_string(), Value::from(now.clone()));
        fields.insert("bo_updated_at".to_string(), Value::from(now));

        let record = Value::Object(fields);
        self.records.insert(display_id, record.clone());
        record
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Custom objects indexed by id.
    pub objects: HashMap<u64, MockCustomObject>,

    /// Base URL the server is reachable at, used to build `next_page_link`.
    pub base_url: String,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an empty custom object to the state.
    pub fn with_object(mut self, id: u64, name: &str) -> Self {
        self.objects.insert(id, MockCustomObject::new(name));
        self
    }

    /// Add a record to a custom object, creating the object if needed.
    ///
    /// # Panics
    ///
    /// Panics if `fields` is not a JSON object.
    pub fn with_record(mut self, object_id: u64, fields: Value) -> Self {
        let Value::Object(map) = fields else {
            panic!("record fields must be a JSON object");
        };
        self.objects
            .entry(object_id)
            .or_insert_with(|| MockCustomObject::new(&format!("Object {object_id}")))
            .insert(map);
        self
    }

    /// Get a custom object by id.
    pub fn get_object(&self, id: u64) -> Option<&MockCustomObject> {
        self.objects.get(&id)
    }

    /// Get a record by custom object id and record id.
    pub fn get_record(&self, object_id: u64, record_id: u64) -> Option<&Value> {
        self.objects.get(&object_id)?.records.get(&record_id)
    }

    /// Create a record. Returns `None` if the custom object does not exist.
    pub fn create_record(&mut self, object_id: u64, fields: Map<String, Value>) -> Option<Value> {
        let object = self.objects.get_mut(&object_id)?;
        Some(object.insert(fields))
    }

    /// List records of a custom object in display id order.
    pub fn list_records(&self, object_id: u64) -> Option<Vec<&Value>> {
        let object = self.objects.get(&object_id)?;
        Some(object.records.values().collect())
    }

    /// Merge fields into a record and bump `bo_updated_at`.
    ///
    /// Server-managed `bo_` fields in `fields` are ignored.
    pub fn update_record(
        &mut self,
        object_id: u64,
        record_id: u64,
        fields: Map<String, Value>,
    ) -> Option<&Value> {
        let record = self
            .objects
            .get_mut(&object_id)?
            .records
            .get_mut(&record_id)?;

        if let Value::Object(existing) = record {
            for (key, value) in fields {
                if !key.starts_with("bo_") {
                    existing.insert(key, value);
                }
            }
            existing.insert("bo_updated_at".to_string(), Value::from(now()));
        }

        self.get_record(object_id, record_id)
    }

    /// Delete a record and return it.
    pub fn delete_record(&mut self, object_id: u64, record_id: u64) -> Option<Value> {
        self.objects.get_mut(&object_id)?.records.remove(&record_id)
    }
}
