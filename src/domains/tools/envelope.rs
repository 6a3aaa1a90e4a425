//! Result envelope construction.

use rmcp::model::{CallToolResult, Content};

/// Wrap an upstream body as `{ content: [ { type: "text", text } ] }`.
///
/// The text is passed through untouched; upstream error payloads come back
/// the same way as successful ones.
pub fn build_callback_object(text: impl Into<String>) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(text.into())]);
    result.is_error = None;
    result
}
