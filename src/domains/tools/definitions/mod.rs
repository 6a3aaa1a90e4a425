//! Tool definitions module.
//!
//! One `PassthroughTool` per upstream endpoint, grouped by resource.

pub mod character;
pub mod common;
pub mod jobs;
pub mod servers;

pub use character::{
    GetCharacterTimelineTool, SearchCharacterBasicInformationTool,
    SearchCharacterEquippedAvatarTool, SearchCharacterEquippedCreatureTool,
    SearchCharacterEquippedEquipmentTool, SearchCharacterEquippedFlagTool,
    SearchCharacterEquippedTalismanTool, SearchCharacterSkillBuffAvatarTool,
    SearchCharacterSkillBuffCreatureTool, SearchCharacterSkillBuffEquipmentTool,
    SearchCharacterSkillTool, SearchCharacterTool, SearchCharactersByFameTool,
};
pub use jobs::{GetJobsTool, GetSkillDetailTool, GetSkillTool};
pub use servers::GetServerListTool;
