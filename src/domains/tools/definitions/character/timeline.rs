//! Character timeline tool.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::resources::definitions::timeline_code_table;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::passthrough::{PassthroughTool, check_max};
use crate::domains::tools::request::{ParameterBag, deserialize_optional_date};

use super::super::common::{api_key_query, character_path};

pub const TIMELINE_LIMIT_MAX: f64 = 100.0;

/// Parameters for the character timeline.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCharacterTimelineParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Server ID")]
    pub server_id: String,

    #[schemars(description = "Character ID")]
    pub character_id: String,

    #[schemars(
        description = "Search start date (e.g. 20250101, 2025-01-01 or 20250101T0000)",
        with = "Option<String>"
    )]
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDateTime>,

    #[schemars(
        description = "Search end date (e.g. 20250131, 2025-01-31 or 20250131T2359)",
        with = "Option<String>"
    )]
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDateTime>,

    #[schemars(description = "Number of results (max 100)", range(max = 100))]
    #[serde(default)]
    pub limit: Option<f64>,

    #[schemars(description = "Timeline code(s) to filter by, comma separated")]
    #[serde(default)]
    pub code: Option<String>,

    #[schemars(description = "Pagination token returned as 'next' by a previous call")]
    #[serde(default)]
    pub next: Option<String>,
}

/// Character history events such as creation, raids and item acquisitions.
#[derive(Debug, Clone, Default)]
pub struct GetCharacterTimelineTool;

impl PassthroughTool for GetCharacterTimelineTool {
    type Params = GetCharacterTimelineParams;

    const NAME: &'static str = "getCharacterTimeline";
    const DESCRIPTION: &'static str = "Get a character's timeline.";

    fn description() -> Cow<'static, str> {
        Cow::Owned(format!(
            "{}\n\n# Timeline codes\n{}",
            Self::DESCRIPTION,
            timeline_code_table()
        ))
    }

    fn validate(params: &GetCharacterTimelineParams) -> Result<(), ToolError> {
        if let Some(limit) = params.limit {
            check_max("limit", limit, TIMELINE_LIMIT_MAX)?;
        }
        Ok(())
    }

    fn path(params: &GetCharacterTimelineParams) -> String {
        character_path(&params.server_id, &params.character_id, "/timeline")
    }

    fn query(params: &GetCharacterTimelineParams) -> ParameterBag {
        api_key_query(&params.apikey)
            .with("startDate", params.start_date)
            .with("endDate", params.end_date)
            .with("limit", params.limit)
            .with("code", params.code.as_deref().map(str::trim))
            .with("next", params.next.as_deref().map(str::trim))
    }
}
