//! MCP Server implementation and lifecycle management.
//!
//! The handler delegates tool calls to the rmcp `ToolRouter` built from the
//! [`ToolRegistry`], and resource requests to the [`ResourceService`].

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::ResourceService,
    tools::{ToolError, ToolRegistry, UpstreamClient, build_tool_router},
};

const INSTRUCTIONS: &str = "Tools for the Dungeon & Fighter Open API. Every tool takes the caller's \
     API key as 'apikey' and returns the raw JSON response of the upstream API as text. \
     Upstream errors are returned in the same way and must be detected from the body.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry shared with the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured upstream.
    pub fn new(config: Config) -> Self {
        let registry = ToolRegistry::new(&config);
        Self::with_registry(config, registry)
    }

    /// Create a new MCP server with a custom upstream client.
    pub fn with_upstream(config: Config, upstream: Arc<dyn UpstreamClient>) -> Self {
        let registry = ToolRegistry::with_upstream(&config, upstream);
        Self::with_registry(config, registry)
    }

    fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(config.clone()));

        Self {
            tool_router: build_tool_router::<Self>(&registry),
            registry: Arc::new(registry),
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            _ => return Err(ToolError::invalid_arguments("arguments must be an object")),
        };

        let result = self.registry.call_tool(name, arguments).await?;
        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::passthrough::testing::RecordingUpstream;
    use serde_json::json;

    fn test_server(upstream: Arc<RecordingUpstream>) -> McpServer {
        let mut config = Config::default();
        config.upstream.base_url = "https://api.example.test".to_string();
        McpServer::with_upstream(config, upstream)
    }

    #[test]
    fn test_get_info_capabilities() {
        let info = test_server(RecordingUpstream::replying("")).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server(RecordingUpstream::replying("")).list_tools();
        assert_eq!(tools.len(), 17);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[tokio::test]
    async fn test_call_tool_returns_envelope() {
        let upstream = RecordingUpstream::replying(r#"{"error":{"status":404}}"#);
        let server = test_server(upstream.clone());

        let result = server
            .call_tool(
                "searchCharacterBasicInformation",
                json!({ "apikey": "KEY", "serverId": "cain", "characterId": "x" }),
            )
            .await
            .unwrap();

        assert_eq!(
            result["content"],
            json!([{ "type": "text", "text": r#"{"error":{"status":404}}"# }])
        );
        assert_eq!(upstream.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_call_tool_rejects_non_object_arguments() {
        let server = test_server(RecordingUpstream::replying(""));
        let result = server.call_tool("getJobs", json!(["KEY"])).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
