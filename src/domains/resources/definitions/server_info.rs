//! Server info resource definition.

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use rmcp::model::ResourceContents;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "dnf://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Name, version and upstream API of this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, String> {
        let info = serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "upstream": config.upstream.base_url,
        });

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&info).map_err(|e| e.to_string())?,
            uri,
        ))
    }
}
