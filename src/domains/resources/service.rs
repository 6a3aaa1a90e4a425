//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::definitions::{DynamicResourceProvider, ServerInfoResource};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Service for listing and reading resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed on read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server name, version and upstream.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with every registered resource.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                ServerInfoResource::resolve(uri, &self.config).map_err(ResourceError::internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_timeline_codes() {
        let result = service()
            .read_resource("dnf://reference/timeline-codes")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("|602|Talisman obtained|"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_dynamic_resource() {
        let result = service().read_resource("dnf://server/info").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("dnf://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
