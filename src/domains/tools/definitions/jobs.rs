//! Job and skill master data tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::passthrough::PassthroughTool;
use crate::domains::tools::request::ParameterBag;

use super::common::{ApiKeyParams, api_key_query};

/// Lists every job and its advancements.
#[derive(Debug, Clone, Default)]
pub struct GetJobsTool;

impl PassthroughTool for GetJobsTool {
    type Params = ApiKeyParams;

    const NAME: &'static str = "getJobs";
    const DESCRIPTION: &'static str = "Get the job master data (job IDs and advancement IDs).";

    fn path(_params: &ApiKeyParams) -> String {
        "/df/jobs".to_string()
    }

    fn query(params: &ApiKeyParams) -> ParameterBag {
        api_key_query(&params.apikey)
    }
}

/// Parameters for the skill list of a job advancement.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSkillParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Job ID")]
    pub job_id: String,

    #[schemars(description = "Job advancement ID")]
    pub job_grow_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetSkillTool;

impl PassthroughTool for GetSkillTool {
    type Params = GetSkillParams;

    const NAME: &'static str = "getSkill";
    const DESCRIPTION: &'static str = "Get the skill master data for a job advancement.";

    fn path(params: &GetSkillParams) -> String {
        format!("/df/skills/{}", params.job_id)
    }

    fn query(params: &GetSkillParams) -> ParameterBag {
        api_key_query(&params.apikey).with("jobGrowId", params.job_grow_id.trim())
    }
}

/// Parameters for a single skill's details.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSkillDetailParams {
    #[schemars(description = "Neople Open API key")]
    pub apikey: String,

    #[schemars(description = "Job ID")]
    pub job_id: String,

    #[schemars(description = "Skill ID")]
    pub skill_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetSkillDetailTool;

impl PassthroughTool for GetSkillDetailTool {
    type Params = GetSkillDetailParams;

    const NAME: &'static str = "getSkillDetail";
    const DESCRIPTION: &'static str = "Get the detailed information of a skill.";

    fn path(params: &GetSkillDetailParams) -> String {
        format!("/df/skills/{}/{}", params.job_id, params.skill_id)
    }

    fn query(params: &GetSkillDetailParams) -> ParameterBag {
        api_key_query(&params.apikey)
    }
}
