//! Test fixtures for the mock server.
//!
//! Provides a default scenario with custom objects and records that mirror
//! what a Freshservice account returns.

use serde_json::{json, Value};

/// Custom object id of the populated fixture object.
pub const ASSETS_OBJECT_ID: u64 = 1;

/// Custom object id of the empty fixture object.
pub const VENDORS_OBJECT_ID: u64 = 2;

/// A scenario: custom objects with their initial records.
#[derive(Debug, Clone, Default)]
pub struct DefaultScenario {
    /// `(id, name, records)` per custom object.
    pub objects: Vec<(u64, String, Vec<Value>)>,
}

/// Factory for mock data.
pub struct Fixtures;

impl Fixtures {
    /// The default scenario.
    ///
    /// - Custom object 1 "Assets" with three records (display ids 1 to 3)
    /// - Custom object 2 "Vendors" with no records
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            objects: vec![
                (
                    ASSETS_OBJECT_ID,
                    "Assets".to_string(),
                    vec![
                        Self::asset("Laptop", "IT"),
                        Self::asset("Monitor", "IT"),
                        Self::asset("Desk", "Facilities"),
                    ],
                ),
                (VENDORS_OBJECT_ID, "Vendors".to_string(), vec![]),
            ],
        }
    }

    /// Record fields for an asset.
    pub fn asset(name: &str, department: &str) -> Value {
        json!({
            "name": name,
            "department": department,
        })
    }
}
