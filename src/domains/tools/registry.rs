//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup and is the single source of truth
//! for both the rmcp router (STDIO) and the HTTP transport dispatch.

use std::collections::HashSet;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::definitions::{
    GetCharacterTimelineTool, GetJobsTool, GetServerListTool, GetSkillDetailTool, GetSkillTool,
    SearchCharacterBasicInformationTool, SearchCharacterEquippedAvatarTool,
    SearchCharacterEquippedCreatureTool, SearchCharacterEquippedEquipmentTool,
    SearchCharacterEquippedFlagTool, SearchCharacterEquippedTalismanTool,
    SearchCharacterSkillBuffAvatarTool, SearchCharacterSkillBuffCreatureTool,
    SearchCharacterSkillBuffEquipmentTool, SearchCharacterSkillTool, SearchCharacterTool,
    SearchCharactersByFameTool,
};
use super::error::ToolError;
use super::passthrough::{PassthroughContext, PassthroughTool};
use super::upstream::{HttpUpstream, UpstreamClient};
use crate::core::config::Config;

/// Boxed handler invoked with raw call arguments.
pub type ToolHandlerFn =
    Arc<dyn Fn(JsonObject) -> BoxFuture<'static, Result<CallToolResult, ToolError>> + Send + Sync>;

/// A registered tool: its metadata plus the handler that runs it.
#[derive(Clone)]
pub struct ToolEntry {
    pub tool: Tool,
    handler: ToolHandlerFn,
}

impl ToolEntry {
    /// Register a [`PassthroughTool`] against the given context.
    pub fn passthrough<T: PassthroughTool>(ctx: PassthroughContext) -> Self {
        let handler: ToolHandlerFn = Arc::new(move |arguments| {
            let ctx = ctx.clone();
            async move { ctx.invoke::<T>(arguments).await }.boxed()
        });

        Self {
            tool: T::to_tool(),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Shared handle to the handler, for routers that need `'static` closures.
    pub fn handler(&self) -> ToolHandlerFn {
        self.handler.clone()
    }

    pub fn call(&self, arguments: JsonObject) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
        (self.handler)(arguments)
    }
}

/// Tool registry - immutable after construction.
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a registry that talks to the configured upstream over HTTP.
    pub fn new(config: &Config) -> Self {
        Self::with_upstream(config, Arc::new(HttpUpstream::new()))
    }

    /// Create a registry using a specific upstream client.
    pub fn with_upstream(config: &Config, upstream: Arc<dyn UpstreamClient>) -> Self {
        let ctx = PassthroughContext::new(upstream, config.upstream.clone());

        let entries = vec![
            ToolEntry::passthrough::<GetServerListTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterBasicInformationTool>(ctx.clone()),
            ToolEntry::passthrough::<GetCharacterTimelineTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterEquippedEquipmentTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterEquippedAvatarTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterEquippedCreatureTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterEquippedFlagTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterEquippedTalismanTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterSkillTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterSkillBuffEquipmentTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterSkillBuffAvatarTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharacterSkillBuffCreatureTool>(ctx.clone()),
            ToolEntry::passthrough::<SearchCharactersByFameTool>(ctx.clone()),
            ToolEntry::passthrough::<GetJobsTool>(ctx.clone()),
            ToolEntry::passthrough::<GetSkillTool>(ctx.clone()),
            ToolEntry::passthrough::<GetSkillDetailTool>(ctx),
        ];

        Self::from_entries(entries)
    }

    /// Tool names must be unique; dispatch picks the first match.
    fn from_entries(entries: Vec<ToolEntry>) -> Self {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                entries.iter().all(|e| seen.insert(e.name()))
            },
            "duplicate tool name registered"
        );
        info!("Registered {} tools", entries.len());

        Self { entries }
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        match self.get(name) {
            Some(entry) => entry.call(arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::passthrough::testing::{RecordingUpstream, args};
    use serde_json::json;

    fn test_registry(upstream: Arc<RecordingUpstream>) -> ToolRegistry {
        let mut config = Config::default();
        config.upstream.base_url = "https://api.example.test".to_string();
        ToolRegistry::with_upstream(&config, upstream)
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry(RecordingUpstream::replying(""));
        let names = registry.tool_names();
        assert_eq!(names.len(), 17);
        for expected in [
            "getServerList",
            "searchCharacter",
            "searchCharacterBasicInformation",
            "getCharacterTimeline",
            "searchCharacterEquippedEquipment",
            "searchCharacterEquippedAvatar",
            "searchCharacterEquippedCreature",
            "searchCharacterEquippedFlag",
            "searchCharacterEquippedTalisman",
            "searchCharacterSkill",
            "searchCharacterSkillBuffEquipment",
            "searchCharacterSkillBuffAvatar",
            "searchCharacterSkillBuffCreature",
            "searchCharactersByFame",
            "getJobs",
            "getSkill",
            "getSkillDetail",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = test_registry(RecordingUpstream::replying(""));
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_tool_requires_apikey() {
        let registry = test_registry(RecordingUpstream::replying(""));
        for tool in registry.tools() {
            let required = tool
                .input_schema
                .get("required")
                .and_then(|r| r.as_array())
                .unwrap_or_else(|| panic!("{} has no required list", tool.name));
            assert!(
                required.iter().any(|v| v == "apikey"),
                "{} does not require apikey",
                tool.name
            );
        }
    }

    #[test]
    #[should_panic(expected = "duplicate tool name")]
    fn test_duplicate_tool_name_panics() {
        let mut config = Config::default();
        config.upstream.base_url = "https://api.example.test".to_string();
        let ctx = PassthroughContext::new(RecordingUpstream::replying(""), config.upstream);

        ToolRegistry::from_entries(vec![
            ToolEntry::passthrough::<GetJobsTool>(ctx.clone()),
            ToolEntry::passthrough::<GetJobsTool>(ctx),
        ]);
    }

    #[tokio::test]
    async fn test_registry_call_dispatches() {
        let upstream = RecordingUpstream::replying("[]");
        let registry = test_registry(upstream.clone());

        let result = registry
            .call_tool("getJobs", args(json!({ "apikey": "k" })))
            .await;
        assert!(result.is_ok());
        assert_eq!(
            upstream.requests(),
            vec!["https://api.example.test/df/jobs?apikey=k".to_string()]
        );
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let upstream = RecordingUpstream::replying("");
        let registry = test_registry(upstream.clone());

        let result = registry.call_tool("unknown", JsonObject::new()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
        assert!(upstream.requests().is_empty());
    }
}
