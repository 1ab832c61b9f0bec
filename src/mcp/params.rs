//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `create` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateParams {
    /// The custom object to add the record to.
    pub custom_object_id: u64,
    /// Record fields as a JSON object.
    pub data: serde_json::Value,
}

/// Parameters for the `list` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListParams {
    /// The custom object whose records to list.
    pub custom_object_id: u64,
    /// Records per page. Omit (or zero) for the server default.
    #[serde(default)]
    pub page_size: Option<i64>,
}

/// Parameters for the `update` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateParams {
    /// The custom object the record belongs to.
    pub custom_object_id: u64,
    /// The record to update.
    pub record_id: u64,
    /// Replacement record fields as a JSON object.
    pub data: serde_json::Value,
}

/// Parameters for the `delete` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteParams {
    /// The custom object the record belongs to.
    pub custom_object_id: u64,
    /// The record to delete.
    pub record_id: u64,
}
