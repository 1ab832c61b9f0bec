//! MCP Server handler for Freshservice custom object records.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    mcp::{CreateParams, DeleteParams, ListParams, UpdateParams},
    CreateCustomObjectRecordRequest, CustomObjectRecordClient, FreshserviceClient,
    FreshserviceError, UpdateCustomObjectRecordRequest,
};

/// Freshservice records MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to manage custom
/// object records through the Model Context Protocol.
///
/// # Tools
///
/// - `create` - Create a record
/// - `list` - List one page of records
/// - `update` - Replace a record's data
/// - `delete` - Delete a record
#[derive(Clone)]
pub struct RecordServer {
    records: Arc<CustomObjectRecordClient<serde_json::Value>>,
}

impl RecordServer {
    /// Create a new RecordServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is incomplete.
    pub fn from_env() -> crate::Result<Self> {
        let client = FreshserviceClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new RecordServer with an existing client.
    pub fn new(client: FreshserviceClient) -> Self {
        Self {
            records: Arc::new(CustomObjectRecordClient::new(client)),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert FreshserviceError to McpError.
    fn to_mcp_error(err: FreshserviceError) -> McpError {
        match &err {
            FreshserviceError::ApiError {
                message,
                status_code: Some(404),
            } => McpError::resource_not_found(message.clone(), None),
            FreshserviceError::ApiError {
                message,
                status_code: Some(400),
            } => McpError::invalid_params(message.clone(), None),
            FreshserviceError::DeletionFailed { .. } => {
                McpError::resource_not_found(err.to_string(), None)
            }
            FreshserviceError::ConfigMissing(msg) | FreshserviceError::InvalidArgument(msg) => {
                McpError::invalid_params(msg.clone(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn to_text<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn require_object(data: &serde_json::Value) -> Result<(), McpError> {
        if data.is_object() {
            Ok(())
        } else {
            Err(McpError::invalid_params(
                "data must be a JSON object of record fields",
                None,
            ))
        }
    }

    /// Handle the `create` tool.
    ///
    /// Returns the created record as pretty-printed JSON.
    pub async fn handle_create(&self, params: CreateParams) -> Result<CallToolResult, McpError> {
        Self::require_object(&params.data)?;
        let response = self
            .records
            .create(
                params.custom_object_id,
                CreateCustomObjectRecordRequest::new(params.data),
            )
            .await
            .map_err(Self::to_mcp_error)?;
        Self::to_text(&response.custom_object)
    }

    /// Handle the `list` tool.
    pub async fn handle_list(&self, params: ListParams) -> Result<CallToolResult, McpError> {
        let response = self
            .records
            .list(params.custom_object_id, params.page_size.unwrap_or(0))
            .await
            .map_err(Self::to_mcp_error)?;
        Self::to_text(&response)
    }

    /// Handle the `update` tool.
    pub async fn handle_update(&self, params: UpdateParams) -> Result<CallToolResult, McpError> {
        Self::require_object(&params.data)?;
        let response = self
            .records
            .update(
                params.custom_object_id,
                params.record_id,
                UpdateCustomObjectRecordRequest::new(params.data),
            )
            .await
            .map_err(Self::to_mcp_error)?;
        Self::to_text(&response.custom_object)
    }

    /// Handle the `delete` tool.
    pub async fn handle_delete(&self, params: DeleteParams) -> Result<CallToolResult, McpError> {
        self.records
            .delete(params.custom_object_id, params.record_id)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::to_text(&serde_json::json!({
            "deleted": true,
            "custom_object_id": params.custom_object_id,
            "record_id": params.record_id,
        }))
    }
}

impl ServerHandler for RecordServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "freshservice".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Freshservice MCP Server - Create, list, update, and delete custom object records."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "create",
                "Create a record in a Freshservice custom object. \
                 data holds the record fields.",
                Self::schema::<CreateParams>(),
            ),
            Tool::new(
                "list",
                "List one page of records of a custom object. \
                 Follow next_page_link on the records for more.",
                Self::schema::<ListParams>(),
            ),
            Tool::new(
                "update",
                "Replace the data of a custom object record.",
                Self::schema::<UpdateParams>(),
            ),
            Tool::new(
                "delete",
                "Delete a custom object record.",
                Self::schema::<DeleteParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "create" => {
                let params: CreateParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_create(params).await
            }
            "list" => {
                let params: ListParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_list(params).await
            }
            "update" => {
                let params: UpdateParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_update(params).await
            }
            "delete" => {
                let params: DeleteParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_delete(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
