//! Tool Router - builds the rmcp ToolRouter from the registry.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::ToolRegistry;

/// Build the tool router with every registered tool.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            let handler = entry.handler();
            router.with_route(ToolRoute::new_dyn(
                entry.tool.clone(),
                move |ctx: ToolCallContext<'_, S>| {
                    let args = ctx.arguments.clone().unwrap_or_default();
                    let handler = handler.clone();
                    async move { handler(args).await.map_err(McpError::from) }.boxed()
                },
            ))
        })
}
