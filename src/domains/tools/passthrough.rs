//! Templated passthrough tools.
//!
//! Every tool in this server follows the same shape: validate the arguments,
//! substitute path segments, build a query string, issue one GET and wrap the
//! body. [`PassthroughTool`] captures the per-tool parts; [`PassthroughContext`]
//! runs the shared pipeline.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::envelope::build_callback_object;
use super::error::ToolError;
use super::request::{ParameterBag, build_request_url};
use super::upstream::UpstreamClient;
use crate::core::config::UpstreamConfig;

/// A tool that forwards to a single upstream GET endpoint.
pub trait PassthroughTool: Send + Sync + 'static {
    /// Typed, schema-described arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Full description; override to append reference data.
    fn description() -> Cow<'static, str> {
        Cow::Borrowed(Self::DESCRIPTION)
    }

    /// Constraints serde cannot express (numeric bounds).
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Upstream path with path segments substituted verbatim.
    fn path(params: &Self::Params) -> String;

    /// Query parameters in the order the upstream documents them.
    fn query(params: &Self::Params) -> ParameterBag;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::description()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Deserialize raw arguments into a tool's parameter type.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Reject values below `min`.
pub fn check_min<T>(name: &str, value: T, min: T) -> Result<(), ToolError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min {
        return Err(ToolError::invalid_arguments(format!(
            "{} must be greater than or equal to {} (got {})",
            name, min, value
        )));
    }
    Ok(())
}

/// Reject values above `max`.
pub fn check_max<T>(name: &str, value: T, max: T) -> Result<(), ToolError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value > max {
        return Err(ToolError::invalid_arguments(format!(
            "{} must be less than or equal to {} (got {})",
            name, max, value
        )));
    }
    Ok(())
}

/// Shared state every passthrough invocation needs.
#[derive(Clone)]
pub struct PassthroughContext {
    upstream: Arc<dyn UpstreamClient>,
    config: Arc<UpstreamConfig>,
}

impl PassthroughContext {
    pub fn new(upstream: Arc<dyn UpstreamClient>, config: UpstreamConfig) -> Self {
        Self {
            upstream,
            config: Arc::new(config),
        }
    }

    /// Build the request URL for already validated parameters.
    pub fn request_url<T: PassthroughTool>(&self, params: &T::Params) -> String {
        let endpoint = self.config.endpoint(&T::path(params));
        build_request_url(&endpoint, &T::query(params))
    }

    /// Run the full pipeline for one call.
    ///
    /// Validation failures return before anything is sent upstream.
    #[instrument(skip_all, fields(tool = T::NAME))]
    pub async fn invoke<T: PassthroughTool>(
        &self,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let params: T::Params = parse_params(arguments)?;
        T::validate(&params)?;

        let path = T::path(&params);
        info!("Forwarding {} to {}", T::NAME, path);

        let url = self.request_url::<T>(&params);
        let body = self.upstream.get_text(&url).await?;
        debug!("Received {} bytes from upstream", body.len());

        Ok(build_callback_object(body))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording upstream double shared by tool tests.

    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingUpstream {
        pub body: String,
        pub requests: Mutex<Vec<String>>,
    }

    impl RecordingUpstream {
        pub fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpstreamClient for RecordingUpstream {
        async fn get_text(&self, url: &str) -> Result<String, ToolError> {
            self.requests.lock().unwrap().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    pub fn context(upstream: Arc<RecordingUpstream>) -> PassthroughContext {
        PassthroughContext::new(
            upstream,
            UpstreamConfig {
                base_url: "https://api.example.test".to_string(),
            },
        )
    }

    pub fn args(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }
}
