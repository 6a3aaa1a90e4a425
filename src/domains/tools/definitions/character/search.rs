//! Character name search tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::error::ToolError;
use crate::domains::tools::passthrough::{PassthroughTool, check_max, check_min};
use crate::domains::tools::request::ParameterBag;

use super::super::common::api_key_query;

pub const SEARCH_LIMIT_MIN: f64 = 1.0;
pub const SEARCH_LIMIT_MAX: f64 = 50.0;

/// How `characterName` is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    /// Exact name match.
    Match,
    /// Partial (full-text) match.
    Full,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Full => "full",
        }
    }
}

/// Parameters for character search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCharacterParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Server ID, or 'all' for every server")]
    pub server_id: String,

    #[schemars(description = "Character name")]
    pub character_name: String,

    #[schemars(description = "Job ID")]
    #[serde(default)]
    pub job_id: Option<String>,

    #[schemars(description = "Job advancement ID")]
    #[serde(default)]
    pub job_grow_id: Option<String>,

    #[schemars(description = "Retrieve all related advancements when jobGrowId is input (default: false)")]
    #[serde(default)]
    pub is_all_job_grow: bool,

    #[schemars(description = "Search type: 'match' (exact) or 'full' (partial)")]
    pub word_type: WordType,

    #[schemars(description = "Number of results (1-50)", range(min = 1, max = 50))]
    pub limit: f64,
}

/// Searches characters on a server by name.
#[derive(Debug, Clone, Default)]
pub struct SearchCharacterTool;

impl PassthroughTool for SearchCharacterTool {
    type Params = SearchCharacterParams;

    const NAME: &'static str = "searchCharacter";
    const DESCRIPTION: &'static str = "Search characters by name on a server.";

    fn validate(params: &SearchCharacterParams) -> Result<(), ToolError> {
        check_min("limit", params.limit, SEARCH_LIMIT_MIN)?;
        check_max("limit", params.limit, SEARCH_LIMIT_MAX)
    }

    fn path(params: &SearchCharacterParams) -> String {
        format!("/df/servers/{}/characters", params.server_id)
    }

    fn query(params: &SearchCharacterParams) -> ParameterBag {
        // The flag always goes out as a literal string, unlike the fame search.
        let is_all_job_grow = if params.is_all_job_grow { "true" } else { "false" };

        api_key_query(&params.apikey)
            .with("characterName", &params.character_name)
            .with("jobId", params.job_id.as_deref())
            .with("jobGrowId", params.job_grow_id.as_deref())
            .with("isAllJobGrow", is_all_job_grow)
            .with("wordType", params.word_type.as_str())
            .with("limit", params.limit)
    }
}
