//! Fame search tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::error::ToolError;
use crate::domains::tools::passthrough::{PassthroughTool, check_max};
use crate::domains::tools::request::ParameterBag;

use super::super::common::api_key_query;

pub const FAME_LIMIT_MAX: f64 = 200.0;

/// Parameters for the fame search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCharactersByFameParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Server ID, or 'all' to search every server")]
    pub server_id: String,

    #[schemars(description = "Minimum fame")]
    #[serde(default)]
    pub min_fame: Option<f64>,

    #[schemars(description = "Maximum fame")]
    #[serde(default)]
    pub max_fame: Option<f64>,

    #[schemars(description = "Job ID")]
    #[serde(default)]
    pub job_id: Option<String>,

    #[schemars(description = "Job advancement ID")]
    #[serde(default)]
    pub job_grow_id: Option<String>,

    #[schemars(description = "Retrieve all related advancements when jobGrowId is input (default: false)")]
    #[serde(default)]
    pub is_all_job_grow: bool,

    #[schemars(
        description = "true to search buffers only, false for damage dealers only, omit to search both"
    )]
    #[serde(default)]
    pub is_buff: Option<bool>,

    #[schemars(description = "Number of results (max 200)", range(max = 200))]
    #[serde(default)]
    pub limit: Option<f64>,
}

/// Searches characters within a fame range.
#[derive(Debug, Clone, Default)]
pub struct SearchCharactersByFameTool;

impl PassthroughTool for SearchCharactersByFameTool {
    type Params = SearchCharactersByFameParams;

    const NAME: &'static str = "searchCharactersByFame";
    const DESCRIPTION: &'static str = "Search characters by fame. Use serverId 'all' to search every server.";

    fn validate(params: &SearchCharactersByFameParams) -> Result<(), ToolError> {
        if let Some(limit) = params.limit {
            check_max("limit", limit, FAME_LIMIT_MAX)?;
        }
        Ok(())
    }

    fn path(params: &SearchCharactersByFameParams) -> String {
        format!("/df/servers/{}/characters-fame", params.server_id)
    }

    fn query(params: &SearchCharactersByFameParams) -> ParameterBag {
        // isAllJobGrow is forwarded as a boolean value here; isBuff drops out when unset.
        api_key_query(&params.apikey)
            .with("minFame", params.min_fame)
            .with("maxFame", params.max_fame)
            .with("jobId", params.job_id.as_deref())
            .with("jobGrowId", params.job_grow_id.as_deref())
            .with("isAllJobGrow", params.is_all_job_grow)
            .with("isBuff", params.is_buff)
            .with("limit", params.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::passthrough::testing::{RecordingUpstream, args, context};
    use crate::domains::tools::request::ParamValue;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let params: SearchCharactersByFameParams =
            serde_json::from_value(json!({ "apikey": "KEY", "serverId": "all" })).unwrap();

        let query = SearchCharactersByFameTool::query(&params);
        assert_eq!(query.get("isAllJobGrow"), Some(&ParamValue::Bool(false)));
        assert_eq!(query.get("isBuff"), Some(&ParamValue::Absent));
        assert_eq!(query.to_query_string(), "apikey=KEY&isAllJobGrow=false");
        assert_eq!(
            SearchCharactersByFameTool::path(&params),
            "/df/servers/all/characters-fame"
        );
    }

    #[test]
    fn test_full_query() {
        let params: SearchCharactersByFameParams = serde_json::from_value(json!({
            "apikey": "KEY",
            "serverId": "cain",
            "minFame": 40000,
            "maxFame": 50000,
            "jobId": "job",
            "jobGrowId": "grow",
            "isAllJobGrow": true,
            "isBuff": false,
            "limit": 200
        }))
        .unwrap();

        assert_eq!(
            SearchCharactersByFameTool::query(&params).to_query_string(),
            "apikey=KEY&minFame=40000&maxFame=50000&jobId=job&jobGrowId=grow&isAllJobGrow=true&isBuff=false&limit=200"
        );
    }

    #[tokio::test]
    async fn test_fractional_fame_is_forwarded() {
        let upstream = RecordingUpstream::replying("{\"rows\":[]}");
        context(upstream.clone())
            .invoke::<SearchCharactersByFameTool>(args(json!({
                "apikey": "KEY",
                "serverId": "all",
                "minFame": 40000.5,
                "maxFame": 50000.0,
                "limit": 10.0
            })))
            .await
            .unwrap();

        assert_eq!(
            upstream.requests(),
            vec![
                "https://api.example.test/df/servers/all/characters-fame?apikey=KEY&minFame=40000.5&maxFame=50000&isAllJobGrow=false&limit=10"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_limit_above_maximum_is_rejected() {
        let upstream = RecordingUpstream::replying("");
        let result = context(upstream.clone())
            .invoke::<SearchCharactersByFameTool>(args(json!({
                "apikey": "KEY",
                "serverId": "all",
                "limit": 201
            })))
            .await;

        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_non_boolean_flag_is_rejected() {
        let upstream = RecordingUpstream::replying("");
        let result = context(upstream.clone())
            .invoke::<SearchCharactersByFameTool>(args(json!({
                "apikey": "KEY",
                "serverId": "all",
                "isBuff": "yes"
            })))
            .await;

        assert!(result.is_err());
        assert!(upstream.requests().is_empty());
    }
}
